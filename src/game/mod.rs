// Game modules: the map collaborator and the characters walking on it

pub mod characters;
pub mod map;
