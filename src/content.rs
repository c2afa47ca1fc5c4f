//! Listing content for preview-oriented modules (blog, shop, portfolio, post
//! sliders). The builder renders these without a data backend, so the default
//! source returns fixed sample items. A host with real posts or products can
//! plug in its own [`ContentSource`].

#[derive(Debug, Clone, PartialEq)]
pub struct PostSummary {
    pub title: String,
    pub date: String,
    pub excerpt: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub title: String,
}

pub trait ContentSource: Send + Sync {
    fn blog_posts(&self, count: usize) -> Vec<PostSummary>;
    fn featured_posts(&self, count: usize) -> Vec<PostSummary>;
    fn related_posts(&self, count: usize) -> Vec<PostSummary>;
    fn products(&self, count: usize) -> Vec<Product>;
    fn projects(&self, count: usize) -> Vec<Project>;
}

const SAMPLE_EXCERPT: &str =
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore.";

/// Deterministic filler matching the builder's preview canvas.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleContent;

impl ContentSource for SampleContent {
    fn blog_posts(&self, count: usize) -> Vec<PostSummary> {
        (1..=count)
            .map(|i| PostSummary {
                title: format!("Blog Post Title {}", i),
                date: format!("Jan {}, 2024", i),
                excerpt: SAMPLE_EXCERPT.to_string(),
            })
            .collect()
    }

    fn featured_posts(&self, count: usize) -> Vec<PostSummary> {
        (1..=count)
            .map(|i| PostSummary {
                title: format!("Featured Post {}", i),
                date: format!("Jan {}, 2024", i),
                excerpt: String::new(),
            })
            .collect()
    }

    fn related_posts(&self, count: usize) -> Vec<PostSummary> {
        (1..=count)
            .map(|i| PostSummary {
                title: format!("Related Post {}", i),
                date: String::new(),
                excerpt: String::new(),
            })
            .collect()
    }

    fn products(&self, count: usize) -> Vec<Product> {
        (1..=count)
            .map(|i| Product {
                name: format!("Product {}", i),
                price: 19.99 * i as f64,
            })
            .collect()
    }

    fn projects(&self, count: usize) -> Vec<Project> {
        (1..=count)
            .map(|i| Project {
                title: format!("Project {}", i),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_content_is_numbered_from_one() {
        let posts = SampleContent.blog_posts(3);
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].title, "Blog Post Title 1");
        assert_eq!(posts[2].date, "Jan 3, 2024");
    }

    #[test]
    fn test_sample_product_prices() {
        let products = SampleContent.products(4);
        assert_eq!(format!("{:.2}", products[3].price), "79.96");
    }
}
