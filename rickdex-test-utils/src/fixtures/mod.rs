use crate::TestSetup;

pub mod factory;
pub mod mockito;

impl TestSetup {
    pub fn character_api<'a>(&'a mut self) -> CharacterApiFixtures<'a> {
        CharacterApiFixtures { setup: self }
    }
}

pub struct CharacterApiFixtures<'a> {
    pub setup: &'a mut TestSetup,
}
