pub mod decode;
pub mod dump;
pub mod generate;
pub mod manifest_loader;

#[cfg(test)]
mod generate_tests;
#[cfg(test)]
mod manifest_loader_tests;
