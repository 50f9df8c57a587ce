pub mod lookup;
pub mod verify;
