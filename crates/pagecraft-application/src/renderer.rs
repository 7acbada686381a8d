//! Detail-page rendering pipeline.
//!
//! Combines the accumulated interview context with AI copywriting and a
//! category-selected template into a complete HTML document. Copywriting is
//! fanned out across the five page sections as independent concurrent
//! tasks; a failed or unconfigured copy capability degrades that section to
//! its static fallback and never affects the others.

use minijinja::{AutoEscape, Environment, context};
use pagecraft_core::agent::TextGenerator;
use pagecraft_core::error::Result;
use pagecraft_core::session::{AnswerValue, ProductContext};
use std::collections::HashMap;
use std::sync::Arc;

const DEFAULT_TEMPLATE: &str = "default.html";

/// The five page sections, paired with the copywriting brief label sent to
/// the text capability.
const SECTIONS: [(&str, &str); 5] = [
    ("hero", "히어로 섹션 (메인 타이틀, 서브 타이틀)"),
    ("features", "특징/장점 섹션"),
    ("benefits", "고객 혜택 섹션"),
    ("details", "상세 정보 섹션"),
    ("cta", "구매 유도 섹션"),
];

/// Renders interview contexts into detail-page HTML.
pub struct PageRenderer {
    env: Environment<'static>,
    copy_ai: Option<Arc<dyn TextGenerator>>,
}

impl PageRenderer {
    /// Builds the renderer with its embedded template set.
    ///
    /// `copy_ai` is the optional copywriting capability; pass `None` to run
    /// entirely on the static fallback copy.
    pub fn new(copy_ai: Option<Arc<dyn TextGenerator>>) -> Result<Self> {
        let mut env = Environment::new();
        // Stored template bodies render through render_str, which has no
        // .html name to trigger escaping on - force it for everything.
        env.set_auto_escape_callback(|_| AutoEscape::Html);

        env.add_template("default.html", include_str!("../templates/default.html"))?;
        env.add_template("fashion.html", include_str!("../templates/fashion.html"))?;
        env.add_template("beauty.html", include_str!("../templates/beauty.html"))?;
        env.add_template("food.html", include_str!("../templates/food.html"))?;
        env.add_template("electronics.html", include_str!("../templates/electronics.html"))?;
        env.add_template("home.html", include_str!("../templates/home.html"))?;

        Ok(Self { env, copy_ai })
    }

    /// Case-insensitive category lookup: `{category}.html` when embedded,
    /// `default.html` otherwise.
    pub fn select_template_name(&self, category: &str) -> String {
        let name = format!("{}.html", category.to_lowercase());
        if self.env.get_template(&name).is_ok() {
            name
        } else {
            DEFAULT_TEMPLATE.to_string()
        }
    }

    /// Renders the detail page for a completed interview context.
    ///
    /// When `override_body` is given (an explicitly requested registry
    /// template), it replaces the category-based lookup.
    pub async fn render(
        &self,
        context: &ProductContext,
        override_body: Option<&str>,
    ) -> Result<String> {
        let sections = self.section_copy(context).await;

        let product_images: Vec<String> = context
            .get("product_images")
            .and_then(AnswerValue::as_items)
            .map(|items| items.to_vec())
            .unwrap_or_default();

        let ctx = context! {
            product_name => text(context, "product_name"),
            category => text(context, "category"),
            target_customer => text(context, "target_customer"),
            usp => text(context, "usp"),
            price_info => text(context, "price_info"),
            mood => text(context, "mood"),
            product_images => product_images,
            sections => sections,
        };

        let html = match override_body {
            Some(body) => self.env.render_str(body, &ctx)?,
            None => {
                let category = match text(context, "category") {
                    "" => "기타",
                    value => value,
                };
                let name = self.select_template_name(category);
                self.env.get_template(&name)?.render(&ctx)?
            }
        };

        Ok(html)
    }

    /// Generates copy for all five sections concurrently.
    ///
    /// Each section is an independent task: one upstream failure falls back
    /// to that section's default string only.
    async fn section_copy(&self, context: &ProductContext) -> HashMap<String, String> {
        let tasks = SECTIONS.iter().map(|(key, label)| async move {
            let copy = match &self.copy_ai {
                Some(ai) => match ai.generate(&copy_prompt(context, label)).await {
                    Ok(reply) => reply.trim().to_string(),
                    Err(e) => {
                        tracing::warn!("Copywriting for section '{key}' failed: {e}");
                        default_copy(key, context)
                    }
                },
                None => default_copy(key, context),
            };
            (key.to_string(), copy)
        });

        futures::future::join_all(tasks).await.into_iter().collect()
    }
}

fn text<'a>(context: &'a ProductContext, key: &str) -> &'a str {
    context
        .get(key)
        .and_then(AnswerValue::as_text)
        .unwrap_or("")
}

fn copy_prompt(context: &ProductContext, section_label: &str) -> String {
    format!(
        "상품 정보:\n\
         - 상품명: {product_name}\n\
         - 카테고리: {category}\n\
         - 타겟 고객: {target_customer}\n\
         - 차별점(USP): {usp}\n\
         - 가격/프로모션: {price_info}\n\
         - 분위기: {mood}\n\
         \n\
         위 정보를 바탕으로 상세페이지의 \"{section_label}\" 섹션에 들어갈\n\
         매력적인 카피라이팅을 작성해주세요.\n\
         \n\
         - 타겟 고객의 언어로 작성\n\
         - 감성적이면서도 정보 전달이 명확하게\n\
         - 적절한 이모지 사용 가능",
        product_name = text(context, "product_name"),
        category = text(context, "category"),
        target_customer = text(context, "target_customer"),
        usp = text(context, "usp"),
        price_info = text(context, "price_info"),
        mood = text(context, "mood"),
    )
}

fn default_copy(section_key: &str, context: &ProductContext) -> String {
    let product_name = match text(context, "product_name") {
        "" => "제품",
        name => name,
    };

    match section_key {
        "hero" => format!("{product_name}과 함께하는 특별한 경험"),
        "features" => "최고의 품질과 합리적인 가격".to_string(),
        "benefits" => "고객 만족을 위해 최선을 다합니다".to_string(),
        "details" => "상세한 정보는 판매자에게 문의해주세요".to_string(),
        "cta" => "지금 바로 만나보세요".to_string(),
        _ => String::new(),
    }
}
