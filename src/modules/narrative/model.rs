use uuid::Uuid;

pub const ROOT_BRANCH: u32 = 1;

pub struct Choice {
    pub branch_id: u32,
    pub text: &'static str,
    pub popularity_score: f64,
}

pub struct Branch {
    pub id: u32,
    pub scene: &'static str,
    pub choices: &'static [Choice],
}

const FIRST_FORK: &[Choice] = &[
    Choice { branch_id: 2, text: "Talk to the stranger", popularity_score: 72.5 },
    Choice { branch_id: 3, text: "Quietly observe the room", popularity_score: 27.5 },
];

const SECOND_FORK: &[Choice] = &[
    Choice { branch_id: 4, text: "Follow the suspicious figure", popularity_score: 60.2 },
    Choice { branch_id: 5, text: "Return to your seat and wait", popularity_score: 39.8 },
];

/// The shared story graph. Every drama plays through it.
pub static STORY: &[Branch] = &[
    Branch {
        id: 1,
        scene: "Rain drums on the café window. A stranger in a grey coat takes the seat across from you.",
        choices: FIRST_FORK,
    },
    Branch {
        id: 2,
        scene: "The stranger smiles and slides an old photograph across the table. It is a picture of you.",
        choices: SECOND_FORK,
    },
    Branch {
        id: 3,
        scene: "You watch in silence. The stranger keeps glancing at the door, as if expecting someone.",
        choices: SECOND_FORK,
    },
    Branch {
        id: 4,
        scene: "You follow the figure into the alley and find a door left ajar. The story ends here, for now.",
        choices: &[],
    },
    Branch {
        id: 5,
        scene: "You sit back down. When you look up, the stranger is gone and a note waits on the table. The end.",
        choices: &[],
    },
];

pub fn branch(id: u32) -> Option<&'static Branch> {
    STORY.iter().find(|b| b.id == id)
}

#[derive(Debug, Clone)]
pub struct NarrativeSession {
    pub session_id: String,
    pub owner: Uuid,
    pub content_id: i64,
    pub current_branch_id: u32,
    pub total_choices_made: u32,
}
