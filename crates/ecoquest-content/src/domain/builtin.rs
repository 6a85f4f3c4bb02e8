//! The catalog shipped with the application.

use super::catalog::{Catalog, Choice, Quest, Story, Tag};

fn choice(label: &str, tag: Tag) -> Choice {
    Choice {
        label: label.to_owned(),
        tag,
    }
}

fn quest(id: &str, title: &str, description: &str, tag: Tag) -> Quest {
    Quest {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        tag,
    }
}

/// Returns the built-in catalog: three stories and five quests.
///
/// # Panics
///
/// Never in practice; the built-in data is validated by this module's tests.
#[must_use]
pub fn builtin_catalog() -> Catalog {
    let stories = vec![
        Story {
            id: "s1".to_owned(),
            text: "You step outside on a sunny day. There is litter scattered along the road."
                .to_owned(),
            choices: vec![
                choice("Pick up the litter nearby", Tag::Outdoor),
                choice("Look for a recycling bin", Tag::Outdoor),
            ],
        },
        Story {
            id: "s2".to_owned(),
            text: "While relaxing at home, you notice a few ways to save energy.".to_owned(),
            choices: vec![
                choice("Unplug idle appliances", Tag::Home),
                choice("Clean up your mailbox", Tag::Home),
            ],
        },
        Story {
            id: "s3".to_owned(),
            text: "Walking down the school hallway, you find an empty classroom.".to_owned(),
            choices: vec![
                choice("Switch off the classroom lights", Tag::School),
                choice("Bring your tumbler along", Tag::School),
            ],
        },
    ];

    let quests = vec![
        quest(
            "q1",
            "Go plogging",
            "Pick up three pieces of litter you spot and dispose of them properly.",
            Tag::Outdoor,
        ),
        quest(
            "q2",
            "Cut digital carbon",
            "Delete ten unneeded emails to save server energy.",
            Tag::Home,
        ),
        quest(
            "q3",
            "Lights out in empty classrooms",
            "Turn off the lights in an unoccupied classroom to save electricity.",
            Tag::School,
        ),
        quest(
            "q4",
            "Use a tumbler",
            "Carry your own tumbler instead of a disposable cup to cut plastic waste.",
            Tag::School,
        ),
        quest(
            "q5",
            "Save energy",
            "Unplug appliances you are not using to stop standby power drain.",
            Tag::Home,
        ),
    ];

    Catalog::new(stories, quests).expect("built-in catalog is valid")
}
