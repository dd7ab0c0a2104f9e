use std::sync::Arc;

use pantrycam_shared::{
    Ingredient,
    handoff::{self, INGREDIENTS_PARAM, PLANNING_ROUTE},
};

use crate::{AnalysisError, AnalysisTask, Analyzer, Image};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Selected,
    Analyzing,
    Analyzed,
}

/// State of the capture page: the selected picture and what it was found to
/// contain.
#[derive(Debug, Default, Clone)]
pub struct CaptureView {
    image: Option<Image>,
    analyzing: bool,
    ingredients: Vec<Ingredient>,
}

impl CaptureView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_image(&mut self, image: Image) {
        self.image = Some(image);
    }

    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    pub fn preview(&self) -> Option<String> {
        self.image.as_ref().map(Image::data_url)
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    pub fn can_analyze(&self) -> bool {
        self.image.is_some() && !self.analyzing
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn status(&self) -> Status {
        match (&self.image, self.analyzing, self.ingredients.is_empty()) {
            (_, true, _) => Status::Analyzing,
            (_, false, false) => Status::Analyzed,
            (Some(_), false, true) => Status::Selected,
            (None, false, true) => Status::Idle,
        }
    }

    /// Runs `analyzer` on the selected picture.
    ///
    /// Without a picture nothing happens. A failed analysis is logged and
    /// leaves the ingredients as they were before the call.
    pub async fn analyze(&mut self, analyzer: Arc<dyn Analyzer>) -> Result<usize, AnalysisError> {
        let Some(image) = self.image.clone() else {
            return Ok(self.ingredients.len());
        };

        self.analyzing = true;
        let outcome = AnalysisTask::spawn(analyzer, image).outcome().await;
        self.analyzing = false;

        match outcome {
            Ok(ingredients) => {
                self.ingredients = ingredients;
                Ok(self.ingredients.len())
            }
            Err(err) => {
                tracing::error!(err = %err, "failed to analyze image");
                Err(err)
            }
        }
    }

    pub fn planning_href(&self) -> pantrycam_shared::Result<String> {
        handoff::href(PLANNING_ROUTE, INGREDIENTS_PARAM, &self.ingredients)
    }
}
