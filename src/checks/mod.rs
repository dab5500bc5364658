pub mod domain_age;
pub mod lexical;
pub mod threat_intel;
