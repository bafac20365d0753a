mod catalog;

pub use self::catalog::CatalogCache;
