pub mod filter_establishment_record;
pub mod paginate;

pub use self::filter_establishment_record::filter_establishment_record;
pub use self::paginate::paginate;
