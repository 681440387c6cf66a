use crate::{
    domain::book::entities::{Book, Publisher},
    entity::{books, publishers},
};

impl From<&publishers::Model> for Publisher {
    fn from(model: &publishers::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            country: model.country.clone(),
        }
    }
}

impl From<(books::Model, Option<publishers::Model>)> for Book {
    fn from((model, publisher): (books::Model, Option<publishers::Model>)) -> Self {
        Self {
            id: model.id,
            title: model.title,
            author: model.author,
            published_date: model.published_date.and_utc(),
            price: model.price,
            genre: model.genre,
            is_available: model.is_available,
            page_count: model.page_count,
            isbn: model.isbn,
            publisher_id: model.publisher_id,
            publisher: publisher.as_ref().map(Publisher::from),
        }
    }
}
