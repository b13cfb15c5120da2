//! The fixed deck of app screenshots.

use serde::{Deserialize, Serialize};

/// Number of slides in the deck.
pub const SLIDE_COUNT: usize = 3;

/// Phone frame drawn over every screenshot.
pub const FRAME_IMAGE: &str = "/moldura.png";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub image: String,
    pub title: String,
    pub description: String,
}

impl Slide {
    pub fn new(
        image: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            image: image.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// An ordered, immutable set of exactly [`SLIDE_COUNT`] slides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideDeck {
    slides: [Slide; SLIDE_COUNT],
}

impl SlideDeck {
    pub fn new(slides: [Slide; SLIDE_COUNT]) -> Self {
        Self { slides }
    }

    /// Slide at `index`, wrapped into the deck.
    pub fn get(&self, index: usize) -> &Slide {
        &self.slides[index % SLIDE_COUNT]
    }

    pub fn len(&self) -> usize {
        SLIDE_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}

impl Default for SlideDeck {
    /// The three BodyUp screens shown on the landing page.
    fn default() -> Self {
        Self::new([
            Slide::new(
                "/imagem_01_para_moldura.png",
                "Tela de Nutrição",
                "Controle sua ingestão calórica. Entenda cada macro. Veja sua hidratação e o impacto de cada refeição na sua rotina.",
            ),
            Slide::new(
                "/imagem_02_para_moldura.png",
                "Tela de Treino",
                "Tenha consciência real dos dias em que você treinou, entendendo os furos, sabendo o que treinou e o que falta treinar.",
            ),
            Slide::new(
                "/imagem_03_para_moldura.png",
                "Tela de progresso",
                "Você tem feito o mínimo? O recomendado? Ou o ideal? Acompanhe os passos imperfeitos e perfeitos que colaboram para sua transformação.",
            ),
        ])
    }
}
