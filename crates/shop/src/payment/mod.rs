mod momo;

pub use self::momo::MomoClient;
