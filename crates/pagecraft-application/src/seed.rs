//! Startup seeding of the template registry.
//!
//! Runs once per boot: when the registry holds no templates at all, the
//! embedded render templates are registered as the default set. A non-empty
//! registry is left untouched.

use pagecraft_core::error::Result;
use pagecraft_core::template::{Template, TemplateRepository};

const SEEDS: [(&str, &str, &str, &str); 6] = [
    (
        "기본 템플릿",
        "other",
        "카테고리 매칭이 없을 때 사용되는 기본 레이아웃",
        include_str!("../templates/default.html"),
    ),
    (
        "패션 템플릿",
        "fashion",
        "모노톤의 미니멀한 패션/의류 레이아웃",
        include_str!("../templates/fashion.html"),
    ),
    (
        "뷰티 템플릿",
        "beauty",
        "파스텔톤의 뷰티/화장품 레이아웃",
        include_str!("../templates/beauty.html"),
    ),
    (
        "식품 템플릿",
        "food",
        "따뜻한 색감의 식품 레이아웃",
        include_str!("../templates/food.html"),
    ),
    (
        "전자기기 템플릿",
        "electronics",
        "다크 테마의 전자기기 레이아웃",
        include_str!("../templates/electronics.html"),
    ),
    (
        "생활용품 템플릿",
        "home",
        "내추럴톤의 생활용품 레이아웃",
        include_str!("../templates/home.html"),
    ),
];

/// Seeds the built-in templates when the registry is empty.
///
/// Returns how many templates were inserted (0 when the registry already
/// had any).
pub async fn seed_builtin_templates(repo: &dyn TemplateRepository) -> Result<usize> {
    if !repo.list(None).await?.is_empty() {
        return Ok(0);
    }

    for (name, category, description, body) in SEEDS {
        let template =
            Template::new(name, category, Some(description.to_string()), body).as_default();
        repo.save(&template).await?;
    }

    tracing::info!("Seeded {} built-in templates", SEEDS.len());
    Ok(SEEDS.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryTemplateRepository;

    #[tokio::test]
    async fn test_seeds_empty_registry() {
        let repo = MemoryTemplateRepository::new();

        let seeded = seed_builtin_templates(&repo).await.unwrap();
        assert_eq!(seeded, 6);

        let templates = repo.list(None).await.unwrap();
        assert_eq!(templates.len(), 6);
        assert!(templates.iter().all(|t| t.is_default));
        assert_eq!(repo.list(Some("food")).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_non_empty_registry_is_untouched() {
        let repo = MemoryTemplateRepository::new();
        repo.save(&Template::new("내 템플릿", "food", None, "<html></html>"))
            .await
            .unwrap();

        let seeded = seed_builtin_templates(&repo).await.unwrap();
        assert_eq!(seeded, 0);
        assert_eq!(repo.list(None).await.unwrap().len(), 1);
    }
}
