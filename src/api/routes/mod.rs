pub mod check;
pub mod estimate;
pub mod glossary;
pub mod health;
