pub mod lookup;
pub mod neis;
