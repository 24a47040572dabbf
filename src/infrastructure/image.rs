//! 图片地址生成
//!
//! 每次读取产品时生成新的随机图片地址，不写回目录状态。

use rand::Rng;

use crate::core::config::ImageConfig;

const SEED_PLACEHOLDER: &str = "{seed}";

#[derive(Debug, Clone)]
pub struct ImageUrlGenerator {
    template: String,
    upper_bound: u32,
}

impl ImageUrlGenerator {
    pub fn new(template: impl Into<String>, upper_bound: u32) -> Self {
        Self {
            template: template.into(),
            upper_bound: upper_bound.max(1),
        }
    }

    pub fn from_config(config: &ImageConfig) -> Self {
        Self::new(config.url_template.clone(), config.upper_bound)
    }

    /// 在 `[0, upper_bound)` 内取随机数并填入模板
    pub fn generate(&self) -> String {
        let seed = rand::rng().random_range(0..self.upper_bound);
        self.format(seed)
    }

    pub fn format(&self, seed: u32) -> String {
        self.template.replace(SEED_PLACEHOLDER, &seed.to_string())
    }
}

impl Default for ImageUrlGenerator {
    fn default() -> Self {
        Self::from_config(&ImageConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_generator_uses_picsum_template() {
        let generator = ImageUrlGenerator::default();
        assert_eq!(
            generator.format(42),
            "https://picsum.photos/200/200?random=42"
        );
    }

    #[test]
    fn generated_seed_stays_in_range() {
        let generator = ImageUrlGenerator::new("img/{seed}", 10);
        for _ in 0..200 {
            let url = generator.generate();
            let seed: u32 = url.trim_start_matches("img/").parse().unwrap();
            assert!(seed < 10);
        }
    }

    #[test]
    fn zero_bound_is_clamped() {
        let generator = ImageUrlGenerator::new("img/{seed}", 0);
        assert_eq!(generator.generate(), "img/0");
    }
}
