use crate::models::{Establishment, FilteredEstablishment};

pub fn filter_establishment_record(establishment: &Establishment) -> FilteredEstablishment {
	FilteredEstablishment {
		id: establishment.id.to_owned(),
		name: establishment.name.to_owned(),
		cuisine: establishment.cuisine.to_owned(),
		location: establishment.location.to_owned(),
		image: establishment.image.to_owned(),
		rating: establishment.rating,
		price_range: establishment.price_range.to_owned(),
	}
}
