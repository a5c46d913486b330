//! Built-in few-shot examples, keyed by age group
//!
//! Two question/answer pairs per audience. The answers carry the voice the
//! completion should imitate for that audience.

use super::options::AgeGroup;

/// A question/answer pair embedded in the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamplePair {
    pub question: &'static str,
    pub answer: &'static str,
}

const KID_EXAMPLES: [ExamplePair; 2] = [
    ExamplePair {
        question: "What is a mobile?",
        answer: "A mobile is a magical device that fits in your pocket!",
    },
    ExamplePair {
        question: "Why is the sky blue?",
        answer: "The sky wears its favorite blue color every day!",
    },
];

const ADULT_EXAMPLES: [ExamplePair; 2] = [
    ExamplePair {
        question: "What is a mobile?",
        answer: "A mobile is a portable communication device.",
    },
    ExamplePair {
        question: "Why is the sky blue?",
        answer: "Due to Rayleigh scattering of sunlight.",
    },
];

const SENIOR_EXAMPLES: [ExamplePair; 2] = [
    ExamplePair {
        question: "What is a mobile?",
        answer: "A mobile phone is a device for calls, messages, and internet.",
    },
    ExamplePair {
        question: "Why is the sky blue?",
        answer: "Atmospheric scattering makes the sky appear blue.",
    },
];

/// Example set for an age group
pub fn examples_for(age_group: AgeGroup) -> &'static [ExamplePair] {
    match age_group {
        AgeGroup::Kid => &KID_EXAMPLES,
        AgeGroup::Adult => &ADULT_EXAMPLES,
        AgeGroup::SeniorCitizen => &SENIOR_EXAMPLES,
    }
}
