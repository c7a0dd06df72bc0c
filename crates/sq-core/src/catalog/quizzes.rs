//! Quiz units per topic.

use super::{QuestionDef, QuizDef};

pub static PHOTOSYNTHESIS: QuizDef = QuizDef {
    title: "Photosynthesis Quiz",
    questions: &[
        QuestionDef {
            id: "q1",
            question: "What do plants use to capture sunlight?",
            options: ["Roots", "Chlorophyll", "Flowers", "Seeds"],
            correct_index: 1,
        },
        QuestionDef {
            id: "q2",
            question: "What do plants take in from the air during photosynthesis?",
            options: ["Oxygen", "Nitrogen", "Carbon dioxide", "Hydrogen"],
            correct_index: 2,
        },
        QuestionDef {
            id: "q3",
            question: "What gas do plants release during photosynthesis?",
            options: ["Carbon dioxide", "Oxygen", "Nitrogen", "Helium"],
            correct_index: 1,
        },
        QuestionDef {
            id: "q4",
            question: "What is the food that plants make during photosynthesis called?",
            options: ["Protein", "Glucose (sugar)", "Fat", "Vitamins"],
            correct_index: 1,
        },
        QuestionDef {
            id: "q5",
            question: "Where does photosynthesis happen in a plant?",
            options: ["In the roots", "In the flowers", "In the leaves", "In the stem"],
            correct_index: 2,
        },
    ],
};

pub static SPACE: QuizDef = QuizDef {
    title: "Solar System Quiz",
    questions: &[
        QuestionDef {
            id: "q1",
            question: "Which planet is closest to the Sun?",
            options: ["Venus", "Earth", "Mercury", "Mars"],
            correct_index: 2,
        },
        QuestionDef {
            id: "q2",
            question: "What is the biggest planet in our solar system?",
            options: ["Saturn", "Jupiter", "Neptune", "Earth"],
            correct_index: 1,
        },
        QuestionDef {
            id: "q3",
            question: "Which planet is called the Red Planet?",
            options: ["Venus", "Mars", "Jupiter", "Mercury"],
            correct_index: 1,
        },
        QuestionDef {
            id: "q4",
            question: "What is at the center of our solar system?",
            options: ["Earth", "Moon", "The Sun", "Jupiter"],
            correct_index: 2,
        },
        QuestionDef {
            id: "q5",
            question: "Which planet do we live on?",
            options: ["Mars", "Venus", "Earth", "Mercury"],
            correct_index: 2,
        },
    ],
};

pub static DINOSAURS: QuizDef = QuizDef {
    title: "Dinosaur Quiz",
    questions: &[
        QuestionDef {
            id: "q1",
            question: "Which dinosaur was known for its very long neck?",
            options: ["T-Rex", "Brachiosaurus", "Triceratops", "Stegosaurus"],
            correct_index: 1,
        },
        QuestionDef {
            id: "q2",
            question: "How many horns did Triceratops have?",
            options: ["One", "Two", "Three", "Four"],
            correct_index: 2,
        },
        QuestionDef {
            id: "q3",
            question: "What do we call old dinosaur bones that have turned to stone?",
            options: ["Rocks", "Crystals", "Fossils", "Gems"],
            correct_index: 2,
        },
        QuestionDef {
            id: "q4",
            question: "Was T-Rex a plant-eater or meat-eater?",
            options: ["Plant-eater", "Meat-eater", "Both", "Neither"],
            correct_index: 1,
        },
    ],
};
