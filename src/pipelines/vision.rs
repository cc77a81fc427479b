use log::info;

use crate::config::AppConfig;
use crate::vocab::VocabularyFilter;

/// Turn a vision-model reply describing a shelf or photo into a cleaned
/// ingredient list, using the configured vocabulary filter.
pub fn process(reply: &str, config: &AppConfig) -> Vec<String> {
    let filter = VocabularyFilter::new(config.filter.clone());
    let detected = filter.parse_detected(reply);
    info!("Detected {} ingredient(s) in vision reply", detected.len());
    detected
}
