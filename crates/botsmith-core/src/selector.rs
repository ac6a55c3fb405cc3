//! Template selection
//!
//! Default policy is first-declared within the category's list. An
//! optional ranking mode prefers the candidate whose declared feature
//! affinity overlaps the analysis most; the first-declared candidate
//! wins every tie, so ranking can only change the outcome when a
//! later template is a strictly better fit.

use crate::catalog::{CodeTemplate, TemplateCatalog, TemplateKind};
use crate::types::{Analysis, Category};

/// Pick one template for a category.
///
/// An empty category list falls back to the fallback category's list;
/// the builtin catalog never reaches that branch. Returns `None` only
/// for a catalog with no template of the requested kind at all.
pub fn select<'a>(
    catalog: &'a TemplateCatalog,
    category: Category,
    kind: TemplateKind,
    analysis: &Analysis,
    rank_by_features: bool,
) -> Option<&'a CodeTemplate> {
    let candidates = catalog.list(category, kind);
    let candidates = if candidates.is_empty() {
        catalog.list(Category::fallback(), kind)
    } else {
        candidates
    };

    if !rank_by_features {
        return candidates.first().copied();
    }

    let mut best: Option<(&CodeTemplate, usize)> = None;
    for template in candidates {
        let score = overlap(template, analysis);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((template, score)),
        }
    }
    best.map(|(t, _)| t)
}

fn overlap(template: &CodeTemplate, analysis: &Analysis) -> usize {
    template
        .feature_affinity
        .intersection(&analysis.features)
        .count()
}
