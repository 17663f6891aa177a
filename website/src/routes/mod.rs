mod about;
mod accessibility;
mod article;
mod articles;
mod contact;
mod index;
mod legal;
mod practice_areas;

pub use about::About;
pub use accessibility::Accessibility;
pub use article::ArticlePage;
pub use articles::Articles;
pub use contact::Contact;
pub use index::Index;
pub use legal::{PrivacyPolicy, TermsOfUse};
pub use practice_areas::PracticeAreas;

#[path = "404.rs"]
mod not_found;
pub use not_found::NotFound;
