mod character;
mod character_page;
