/// Outcome of an artwork fetch. A failed fetch is `Missing`, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artwork {
    Image(Vec<u8>),
    Missing,
}

impl Artwork {
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            Artwork::Image(bytes) => Some(bytes),
            Artwork::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Artwork::Missing)
    }
}
