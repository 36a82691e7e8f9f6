use shared::Newspaper as NewspaperDto;

use crate::domain::models::Newspaper as DomainNewspaper;

/// Mapper from domain newspapers to DTOs
pub struct NewspaperMapper;

impl NewspaperMapper {
    pub fn to_dto(domain: DomainNewspaper) -> NewspaperDto {
        NewspaperDto {
            id: domain.id,
            name: domain.name,
            price: domain.price,
        }
    }
}
