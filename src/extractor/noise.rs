//! Noise subtree removal

use ego_tree::NodeId;
use scraper::Html;

use super::ArticleExtractor;

impl ArticleExtractor {
    /// Detach every subtree matching the noise denylist from `document`.
    ///
    /// Callers pass a working copy of the parse tree; the original stays
    /// available for the collectors that scan the full document. Detaching an
    /// already-detached node is a no-op, so running this twice is harmless.
    pub(super) fn strip_noise(&self, document: &mut Html) {
        let ids: Vec<NodeId> = self
            .noise_selectors
            .iter()
            .flat_map(|selector| document.select(selector).map(|el| el.id()))
            .collect();

        for id in ids {
            if let Some(mut node) = document.tree.get_mut(id) {
                node.detach();
            }
        }
    }
}
