pub mod change;
pub mod commit;
