use rayon::prelude::*;
use tracing::debug;

use crate::analyzers::TextAnalyzer;
use crate::report::TextReport;

/// Analyze many texts in parallel. Results keep the input order.
pub fn analyze_batch<S>(analyzer: &TextAnalyzer, texts: &[S]) -> Vec<TextReport>
where
    S: AsRef<str> + Sync,
{
    debug!(texts = texts.len(), "starting batch analysis");
    texts
        .par_iter()
        .map(|text| analyzer.analyze(text.as_ref()))
        .collect()
}

/// Analyze named texts in parallel, keeping each name with its report.
pub fn analyze_named<N, S>(analyzer: &TextAnalyzer, texts: &[(N, S)]) -> Vec<(N, TextReport)>
where
    N: Clone + Send + Sync,
    S: AsRef<str> + Sync,
{
    texts
        .par_iter()
        .map(|(name, text)| (name.clone(), analyzer.analyze(text.as_ref())))
        .collect()
}
