//! Move Reconciliation
//!
//! Turns a completed drag-and-drop into one `set_assoc_sort` request.

use leptos_sortable_tree::TreeChange;

use super::{TreeSync, TreeWidget};
use crate::api::BridgeApi;
use crate::error::{BridgeResult, Failure};
use crate::models::{MoveRequest, NodeData};
use crate::node_data::{extract_node_data, NodeAttrs};
use crate::notify::{escape_html, Notifier};

/// Title used when a node moves from or to the top level
const ROOT_TITLE: &str = "Hauptebene";

/// Domain records of one move, extracted from the widget's change event
#[derive(Debug, Clone, PartialEq)]
pub struct MoveSnapshot {
    pub moved: NodeData,
    pub source: Option<NodeData>,
    pub target: Option<NodeData>,
    pub target_next_node: Option<NodeData>,
}

impl MoveSnapshot {
    pub fn extract(change: &TreeChange<NodeAttrs>) -> BridgeResult<Self> {
        let moved = extract_node_data(&change.moved)?;
        let source = change.src_parent.as_ref().map(extract_node_data).transpose()?;
        let target = change.target_parent.as_ref().map(extract_node_data).transpose()?;
        let siblings = change
            .target_children
            .iter()
            .map(extract_node_data)
            .collect::<BridgeResult<Vec<_>>>()?;
        let target_next_node = find_next_node(&siblings, &moved).cloned();

        Ok(Self { moved, source, target, target_next_node })
    }

    pub fn into_request(self) -> MoveRequest {
        MoveRequest {
            moved: self.moved,
            source: self.source,
            target: self.target,
            target_next_node: self.target_next_node,
        }
    }
}

/// Sibling directly after `moved` in `siblings`
pub fn find_next_node<'a>(siblings: &'a [NodeData], moved: &NodeData) -> Option<&'a NodeData> {
    let position = siblings.iter().position(|n| n.same_node(moved));
    if position.is_none() {
        log::debug!("No next sibling node found after node with id={}", moved.id);
    }
    position.and_then(|i| siblings.get(i + 1))
}

/// Human-readable description of a move (HTML, titles escaped)
pub fn move_message(snapshot: &MoveSnapshot) -> String {
    let title = |node: &Option<NodeData>| escape_html(node.as_ref().map_or(ROOT_TITLE, |n| n.title.as_str()));
    format!(
        "Verschieben <b>\"{}\"</b> von <b>\"{}\"</b> nach <b>\"{}\"</b> gestartet!",
        escape_html(&snapshot.moved.title),
        title(&snapshot.source),
        title(&snapshot.target),
    )
}

impl<A, N, W> TreeSync<A, N, W>
where
    A: BridgeApi,
    N: Notifier,
    W: TreeWidget,
{
    /// Report a move the widget already applied to its own DOM.
    ///
    /// There is no rollback: on failure the visible tree stays ahead of the
    /// server until the tree is fetched again.
    pub async fn reconcile_move(&self, change: TreeChange<NodeAttrs>) {
        let snapshot = match MoveSnapshot::extract(&change) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                log::error!("cannot read moved node: {}", err);
                self.notifier.error(&Failure::Move.message(&err));
                return;
            }
        };

        self.notifier.info(&move_message(&snapshot));

        let request = snapshot.into_request();
        match self.api.apply_move(&request).await {
            Ok(()) => {
                log::info!("moved {} {} persisted", request.moved.type_of.as_str(), request.moved.id);
                self.notifier.success("Daten erfolgreich aktualisiert");
            }
            Err(err) => {
                log::error!("Error: {}", err);
                log::warn!(
                    "tree view now differs from the server for {} {}",
                    request.moved.type_of.as_str(),
                    request.moved.id
                );
                self.notifier.error(&Failure::Move.message(&err));
                if self.options.reload_tree_on_move_failure {
                    self.load_tree().await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_next_node_matches_type_and_id() {
        let siblings = vec![
            NodeData::product(3, "P3", 1, None),
            NodeData::category(3, "C3"),
            NodeData::category(4, "C4"),
        ];

        let next = find_next_node(&siblings, &NodeData::category(3, "C3"));
        assert_eq!(next.map(|n| n.id), Some(4));

        let next = find_next_node(&siblings, &NodeData::product(3, "P3", 1, None));
        assert_eq!(next.map(|n| n.title.as_str()), Some("C3"));

        assert!(find_next_node(&siblings, &NodeData::category(4, "C4")).is_none());
        assert!(find_next_node(&siblings, &NodeData::category(9, "?")).is_none());
    }

    #[test]
    fn test_move_message_names_root_level() {
        let snapshot = MoveSnapshot {
            moved: NodeData::category(2, "Hüte"),
            source: None,
            target: Some(NodeData::category(1, "Kleidung")),
            target_next_node: None,
        };
        assert_eq!(
            move_message(&snapshot),
            "Verschieben <b>\"Hüte\"</b> von <b>\"Hauptebene\"</b> nach <b>\"Kleidung\"</b> gestartet!"
        );
    }

    #[test]
    fn test_move_message_escapes_titles() {
        let snapshot = MoveSnapshot {
            moved: NodeData::category(2, "<b>Hüte</b>"),
            source: Some(NodeData::category(1, "Schuhe & \"Socken\"")),
            target: None,
            target_next_node: None,
        };
        assert_eq!(
            move_message(&snapshot),
            "Verschieben <b>\"&lt;b&gt;Hüte&lt;/b&gt;\"</b> von <b>\"Schuhe &amp; &quot;Socken&quot;\"</b> nach <b>\"Hauptebene\"</b> gestartet!"
        );
    }

    #[test]
    fn test_extract_snapshot() {
        let moved = NodeData::category(2, "B");
        let change = TreeChange {
            moved: NodeAttrs::from(&moved),
            src_parent: None,
            target_parent: Some(NodeAttrs::from(&NodeData::category(1, "A"))),
            target_children: vec![
                NodeAttrs::from(&NodeData::category(5, "E")),
                NodeAttrs::from(&moved),
                NodeAttrs::from(&NodeData::category(6, "F")),
            ],
        };

        let snapshot = MoveSnapshot::extract(&change).unwrap();
        assert_eq!(snapshot.moved, moved);
        assert_eq!(snapshot.source, None);
        assert_eq!(snapshot.target.map(|t| t.id), Some(1));
        assert_eq!(snapshot.target_next_node.map(|n| n.id), Some(6));
    }
}
