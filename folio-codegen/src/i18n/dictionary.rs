//! Static phrase dictionary for the target locale.

use folio_core::Locale;
use folio_layout::Config;
use indexmap::IndexMap;

/// Common landing page phrases, `zh` -> `en`.
const ZH_EN_PHRASES: &[(&str, &str)] = &[
    ("欢迎", "Welcome"),
    ("首页", "Home"),
    ("产品", "Product"),
    ("功能", "Features"),
    ("功能特性", "Features"),
    ("价格", "Pricing"),
    ("定价", "Pricing"),
    ("关于我们", "About Us"),
    ("联系我们", "Contact Us"),
    ("博客", "Blog"),
    ("文档", "Docs"),
    ("登录", "Sign In"),
    ("注册", "Sign Up"),
    ("退出登录", "Sign Out"),
    ("立即开始", "Get Started"),
    ("开始使用", "Get Started"),
    ("免费试用", "Free Trial"),
    ("开始免费试用", "Start Free Trial"),
    ("了解更多", "Learn More"),
    ("查看演示", "View Demo"),
    ("预约演示", "Book a Demo"),
    ("联系销售", "Contact Sales"),
    ("立即购买", "Buy Now"),
    ("立即订阅", "Subscribe Now"),
    ("订阅", "Subscribe"),
    ("免费", "Free"),
    ("基础版", "Basic"),
    ("专业版", "Pro"),
    ("团队版", "Team"),
    ("企业版", "Enterprise"),
    ("最受欢迎", "Most Popular"),
    ("推荐", "Recommended"),
    ("每月", "per month"),
    ("每年", "per year"),
    ("按月付费", "Billed monthly"),
    ("按年付费", "Billed annually"),
    ("无限项目", "Unlimited projects"),
    ("优先支持", "Priority support"),
    ("客户评价", "Testimonials"),
    ("常见问题", "Frequently Asked Questions"),
    ("合作伙伴", "Partners"),
    ("隐私政策", "Privacy Policy"),
    ("服务条款", "Terms of Service"),
    ("版权所有", "All rights reserved"),
    ("输入您的邮箱", "Enter your email"),
    ("无需信用卡", "No credit card required"),
    ("随时取消", "Cancel anytime"),
];

/// Exact-match phrase table for one target locale.
///
/// Lookups trim surrounding whitespace; phrases missing from the table pass
/// through unchanged.
#[derive(Debug, Clone)]
pub struct Dictionary {
    locale: Locale,
    phrases: IndexMap<String, String>,
}

impl Dictionary {
    /// An empty dictionary for `locale`.
    pub fn empty(locale: Locale) -> Self {
        Self {
            locale,
            phrases: IndexMap::new(),
        }
    }

    /// Built-in phrases for the locale pair, if any ship with folio.
    pub fn builtin(source: &Locale, target: &Locale) -> Self {
        let mut dictionary = Self::empty(target.clone());
        if source.language() == "zh" && target.language() == "en" {
            dictionary.extend(ZH_EN_PHRASES.iter().copied());
        }
        dictionary
    }

    /// Built-in phrases plus `[dictionary.<target>]` from the config.
    pub fn from_config(config: &Config) -> Self {
        let project = &config.project;
        let mut dictionary = Self::builtin(&project.source_locale, &project.target_locale);
        dictionary.extend(config.phrases_for(&project.target_locale));
        dictionary
    }

    /// Add or replace a phrase.
    pub fn insert(&mut self, source: &str, translation: impl Into<String>) {
        self.phrases
            .insert(source.trim().to_string(), translation.into());
    }

    /// Add phrases, later entries replacing earlier ones.
    pub fn extend<'a>(&mut self, phrases: impl IntoIterator<Item = (&'a str, &'a str)>) {
        for (source, translation) in phrases {
            self.insert(source, translation);
        }
    }

    /// Translation of `phrase`, if known.
    pub fn lookup(&self, phrase: &str) -> Option<&str> {
        self.phrases.get(phrase.trim()).map(String::as_str)
    }

    /// Target locale of this dictionary.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}
