/// A named joke-construction pattern offered at the Structure stage.
pub struct JokeStructure {
    pub name: &'static str,
    pub summary: &'static str,
}

pub static STRUCTURES: [JokeStructure; 6] = [
    JokeStructure {
        name: "Rule of Three",
        summary: "List two normal items, then a surprising third to land the punch.",
    },
    JokeStructure {
        name: "Misdirection",
        summary: "Set up one expectation, then reveal a different angle at the end.",
    },
    JokeStructure {
        name: "Analogy",
        summary: "Compare the subject to a vivid, unexpected parallel.",
    },
    JokeStructure {
        name: "Definition",
        summary: "Define the subject in a precise but absurd way.",
    },
    JokeStructure {
        name: "Complaint",
        summary: "Adopt a frustrated tone about a specific absurd detail.",
    },
    JokeStructure {
        name: "List",
        summary: "Stack short beats that escalate the absurdity.",
    },
];
