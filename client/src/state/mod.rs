//! Client-side state models.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui`, `viewer`, `contact`) so each component
//! depends on a small focused model. The models are plain structs with
//! transition methods; components wrap them in `RwSignal`s.

pub mod contact;
pub mod ui;
pub mod viewer;
