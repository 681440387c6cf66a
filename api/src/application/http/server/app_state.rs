use std::sync::Arc;

use bookshelf_core::application::BookshelfService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: BookshelfService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: BookshelfService) -> Self {
        Self { args, service }
    }
}
