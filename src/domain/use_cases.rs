pub mod about;
pub mod contact;
pub mod experience;
pub mod faq;
pub mod hero;
pub mod project;
pub mod testimonial;
