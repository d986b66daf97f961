//! Static banner shown above the product grid.

/// Banner copy. The banner takes no inputs and holds no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    pub headline: &'static str,
    pub highlight: &'static str,
    pub tagline: &'static str,
}

pub const BANNER: Banner = Banner {
    headline: "Discover Exciting",
    highlight: "New Products",
    tagline: "Explore our latest arrivals and find something special for you!",
};
