pub mod dropwords;
pub mod roots;
pub mod supplements;
pub mod synonyms;
