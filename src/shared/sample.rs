//! Demo catalog: the Kotlin developer offering and its students.

use crate::domain::{ContentItem, Level, Offering, Student};

pub fn kotlin_developer() -> Offering {
    Offering::new(
        "Formação Kotlin Developer",
        Level::Intermediate,
        vec![
            ContentItem::new("Introdução ao Kotlin", 90),
            ContentItem::new("Orientação a Objetos com Kotlin", 120),
            ContentItem::new("Coleções e Funções de Extensão", 100),
        ],
    )
}

pub fn students() -> Vec<Student> {
    vec![
        Student::new("Maria Silva"),
        Student::new("João Pereira"),
        Student::new("Ana Souza"),
    ]
}
