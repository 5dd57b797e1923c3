/// Something that belongs to exactly one category of a filterable grid.
pub trait Categorized {
    type Category: Copy + Eq;

    fn category(&self) -> Self::Category;
}

/// Category selector used by the menu and gallery tabs.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum Filter<C> {
    #[default]
    All,
    Only(C),
}

impl<C: Copy + Eq> Filter<C> {
    pub fn matches(&self, category: C) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => *c == category,
        }
    }
}

pub fn filtered<T>(items: &[T], filter: Filter<T::Category>) -> Vec<T>
where
    T: Categorized + Clone,
{
    items
        .iter()
        .filter(|item| filter.matches(item.category()))
        .cloned()
        .collect()
}

/// Wrap-around position over `len` entries. Used by the gallery lightbox and
/// the testimonial carousel.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Cursor {
    index: usize,
    len: usize,
}

impl Cursor {
    /// `None` when there is nothing to point at.
    pub fn new(index: usize, len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            index: index.min(len - 1),
            len,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    pub fn has_many(&self) -> bool {
        self.len > 1
    }

    /// "3 of 12"
    pub fn position_label(&self) -> String {
        format!("{} of {}", self.index + 1, self.len)
    }
}
