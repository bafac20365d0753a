pub mod momo;
pub mod myconfig;
