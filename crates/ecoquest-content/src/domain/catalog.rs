//! Catalog types and validation.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category label connecting a story choice to a pool of quests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    /// Outside, in public space.
    Outdoor,
    /// At school.
    School,
    /// At home.
    Home,
}

impl Tag {
    /// The lowercase wire name of the tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Outdoor => "outdoor",
            Tag::School => "school",
            Tag::Home => "home",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable answer to a story prompt.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Choice {
    /// Text shown on the button.
    pub label: String,
    /// Quest pool this choice leads to.
    pub tag: Tag,
}

/// A narrative prompt with its ordered choices.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Story {
    /// Stable identifier.
    pub id: String,
    /// Prompt text.
    pub text: String,
    /// Choices in display order.
    pub choices: Vec<Choice>,
}

/// A concrete eco action the user is asked to perform.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quest {
    /// Stable identifier.
    pub id: String,
    /// Short title, also recorded in history.
    pub title: String,
    /// Instructions.
    #[serde(rename = "desc")]
    pub description: String,
    /// Category.
    pub tag: Tag,
}

/// Reasons a catalog is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog has no stories to draw from.
    #[error("catalog has no stories")]
    NoStories,

    /// A story offers nothing to choose.
    #[error("story {0} has no choices")]
    StoryWithoutChoices(String),

    /// Two stories share an identifier.
    #[error("duplicate story id: {0}")]
    DuplicateStoryId(String),

    /// Two quests share an identifier.
    #[error("duplicate quest id: {0}")]
    DuplicateQuestId(String),

    /// A quest has an empty title.
    #[error("quest {0} has an empty title")]
    EmptyQuestTitle(String),

    /// A choice points at a tag no quest carries.
    #[error("story {story_id} offers tag {tag} but no quest has that tag")]
    UnreachableTag {
        /// The story holding the dangling choice.
        story_id: String,
        /// The tag with no quests.
        tag: Tag,
    },

    /// The catalog source could not be read or parsed.
    #[error("catalog source error: {0}")]
    Source(String),
}

/// Validated, read-only collection of stories and quests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    stories: Vec<Story>,
    quests: Vec<Quest>,
}

impl Catalog {
    /// Builds a catalog after validating it.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found.
    pub fn new(stories: Vec<Story>, quests: Vec<Quest>) -> Result<Self, CatalogError> {
        let catalog = Self { stories, quests };
        catalog.validate()?;
        Ok(catalog)
    }

    /// All stories in catalog order.
    #[must_use]
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    /// All quests in catalog order.
    #[must_use]
    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    /// Quests carrying `tag`, in catalog order.
    #[must_use]
    pub fn quests_for(&self, tag: Tag) -> Vec<&Quest> {
        self.quests.iter().filter(|q| q.tag == tag).collect()
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.stories.is_empty() {
            return Err(CatalogError::NoStories);
        }

        let mut story_ids = HashSet::new();
        for story in &self.stories {
            if !story_ids.insert(story.id.as_str()) {
                return Err(CatalogError::DuplicateStoryId(story.id.clone()));
            }
            if story.choices.is_empty() {
                return Err(CatalogError::StoryWithoutChoices(story.id.clone()));
            }
        }

        let mut quest_ids = HashSet::new();
        let mut quest_tags = HashSet::new();
        for quest in &self.quests {
            if !quest_ids.insert(quest.id.as_str()) {
                return Err(CatalogError::DuplicateQuestId(quest.id.clone()));
            }
            if quest.title.trim().is_empty() {
                return Err(CatalogError::EmptyQuestTitle(quest.id.clone()));
            }
            quest_tags.insert(quest.tag);
        }

        for story in &self.stories {
            if let Some(choice) = story.choices.iter().find(|c| !quest_tags.contains(&c.tag)) {
                return Err(CatalogError::UnreachableTag {
                    story_id: story.id.clone(),
                    tag: choice.tag,
                });
            }
        }

        Ok(())
    }
}
