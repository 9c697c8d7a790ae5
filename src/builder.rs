use crate::assembler::DocumentAssembler;
use crate::config::EngineConfig;
use crate::error::EngineError;
use billforge_format::{Catalog, Formatter, LocaleSettings, Translator};
use billforge_layout::{FooterOptions, LayoutEngine, PageGeometry};
use billforge_style::{Margins, PageSize};
use chrono::NaiveDate;
use std::sync::Arc;

/// A builder for creating a [`DocumentAssembler`].
#[derive(Default)]
pub struct AssemblerBuilder {
    config: EngineConfig,
    translator: Option<Arc<dyn Translator>>,
}

impl AssemblerBuilder {
    /// Creates a builder with US Letter pages, 48pt margins and `en-US` formatting.
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces every host setting at once.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.config.page_size = page_size;
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.config.margins = margins;
        self
    }

    /// Selects number, currency and date conventions. Unknown tags fall back
    /// to `en-US`. Also picks the built-in catalog for the tag's language
    /// unless a translator is set explicitly.
    pub fn with_locale(mut self, tag: &str) -> Self {
        self.config.locale = tag.to_string();
        self
    }

    pub fn with_currency_symbol(mut self, symbol: &str) -> Self {
        self.config.currency_symbol = Some(symbol.to_string());
        self
    }

    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Some(Arc::new(translator));
        self
    }

    /// Loads message overrides from a flat JSON object of `"key": "text"` pairs.
    pub fn with_catalog_json(self, language: &str, json: &str) -> Result<Self, EngineError> {
        let catalog = Catalog::from_json(language, json)?;
        Ok(self.with_translator(catalog))
    }

    /// Prints a "Generated on" line in the footer of every page.
    pub fn with_generated_on(mut self, date: NaiveDate) -> Self {
        self.config.generated_on = Some(date);
        self
    }

    pub fn with_footer_message(mut self, message: &str) -> Self {
        self.config.footer_message = Some(message.to_string());
        self
    }

    pub fn with_page_numbers(mut self, enabled: bool) -> Self {
        self.config.show_page_numbers = enabled;
        self
    }

    /// Consumes the builder, rejecting page geometry with no usable content area.
    pub fn build(self) -> Result<DocumentAssembler, EngineError> {
        let assembler = self.assemble();
        assembler.engine().geometry().validate()?;
        Ok(assembler)
    }

    pub(crate) fn assemble(self) -> DocumentAssembler {
        let AssemblerBuilder { config, translator } = self;

        let mut locale = LocaleSettings::for_tag_or_default(&config.locale);
        if let Some(symbol) = &config.currency_symbol {
            locale = locale.with_currency_symbol(symbol.as_str());
        }
        let translator: Arc<dyn Translator> =
            translator.unwrap_or_else(|| Arc::new(Catalog::for_locale(&locale.tag)));
        let formatter = Formatter::new(locale, translator.as_ref());

        let geometry = PageGeometry::new(config.page_size, config.margins).with_footer(true);
        let footer = FooterOptions {
            message: config.footer_message,
            generated_on: config.generated_on,
            show_page_numbers: config.show_page_numbers,
        };

        DocumentAssembler::new(LayoutEngine::new(geometry), formatter, translator, footer)
    }
}
