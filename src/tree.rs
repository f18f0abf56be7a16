// SPDX-FileCopyrightText: 2022 Harish Rajagopal <harish.rajagopals@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Renderer for nested comment threads
use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::constants::{INDENT_CLOSE, INDENT_OPEN, LINE_SEP, MAX_THREAD_DEPTH};
use crate::errors::{AppError, AppResult};
use crate::models::{Adjacency, RenderContext, ThreadNode};
use crate::renderer::NodeRenderer;

/// Pending work in the depth-first walk
enum Visit<'a, N> {
    /// Render the node at the given nesting depth, then its children
    Enter(&'a N, usize),
    /// Close the block of the most recently entered node
    Leave,
}

/// Struct to render the replies under a post as nested blocks.
pub struct ThreadRenderer<R> {
    renderer: R,
    max_depth: usize,
}

impl<R> ThreadRenderer<R> {
    /// Initialize a thread renderer.
    ///
    /// # Arguments
    /// * `renderer` - The renderer for each individual comment
    /// * `max_depth` - How deeply comments may nest before the thread is rejected
    pub fn new(renderer: R, max_depth: usize) -> Self {
        Self {
            renderer,
            max_depth,
        }
    }

    pub fn with_default_depth(renderer: R) -> Self {
        Self::new(renderer, MAX_THREAD_DEPTH)
    }

    /// Render all replies under the given root.
    ///
    /// Each comment becomes an indented block holding its own HTML followed by the blocks of its
    /// replies, in the order given by the adjacency. Lines are joined by newlines. The root itself
    /// isn't rendered, and a root without replies gives an empty string.
    ///
    /// # Arguments
    /// * `root` - The ID of the post whose replies are rendered
    /// * `adjacency` - Ordered replies for each post
    /// * `ctx` - Per-request data passed to every comment
    #[instrument(skip_all, fields(root = ?root))]
    pub fn render_thread<N>(
        &self,
        root: &N::Id,
        adjacency: &Adjacency<N>,
        ctx: &RenderContext,
    ) -> AppResult<String>
    where
        N: ThreadNode,
        R: NodeRenderer<N>,
    {
        self.renderer.prepare()?;

        let children = match adjacency.get(root) {
            Some(children) if !children.is_empty() => children,
            _ => return Ok(String::new()),
        };

        let mut lines: Vec<String> = Vec::new();
        let mut visited = HashSet::from([root]);
        let mut stack: Vec<_> = children.iter().rev().map(|c| Visit::Enter(c, 1)).collect();

        while let Some(visit) = stack.pop() {
            let (node, depth) = match visit {
                Visit::Enter(node, depth) => (node, depth),
                Visit::Leave => {
                    lines.push(INDENT_CLOSE.into());
                    continue;
                }
            };

            if depth > self.max_depth {
                return Err(AppError::ThreadTooDeep(self.max_depth));
            }
            if !visited.insert(node.id()) {
                return Err(AppError::MalformedThread(format!(
                    "comment {:?} is reachable more than once",
                    node.id()
                )));
            }

            lines.push(INDENT_OPEN.into());
            lines.push(self.renderer.render_node(node, ctx)?);

            stack.push(Visit::Leave);
            if let Some(children) = adjacency.get(node.id()) {
                stack.extend(children.iter().rev().map(|c| Visit::Enter(c, depth + 1)));
            }
        }

        debug!("Rendered {} comments", visited.len() - 1);
        Ok(lines.join(LINE_SEP))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;
    use std::collections::HashMap;

    use test_case::test_case;

    /// Minimal node carrying only its position in the forest
    #[derive(Debug)]
    struct Node {
        id: u32,
        parent: u32,
    }

    impl ThreadNode for Node {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn parent_id(&self) -> &u32 {
            &self.parent
        }
    }

    fn label(node: &Node, _ctx: &RenderContext) -> AppResult<String> {
        Ok(format!("c{}", node.id))
    }

    fn adjacency(edges: &[(u32, &[u32])]) -> Adjacency<Node> {
        edges
            .iter()
            .map(|(parent, children)| {
                let nodes: Vec<Node> = children
                    .iter()
                    .map(|&id| Node {
                        id,
                        parent: *parent,
                    })
                    .collect();
                (*parent, nodes)
            })
            .collect::<HashMap<_, _>>()
    }

    fn render(root: u32, adjacency: &Adjacency<Node>) -> AppResult<String> {
        ThreadRenderer::with_default_depth(label).render_thread(
            &root,
            adjacency,
            &RenderContext::anonymous(String::new()),
        )
    }

    fn block(html: &str, inner: &[String]) -> String {
        let mut lines = vec![INDENT_OPEN.to_string(), html.to_string()];
        lines.extend_from_slice(inner);
        lines.push(INDENT_CLOSE.to_string());
        lines.join("\n")
    }

    #[test_case(&[]; "absent root")]
    #[test_case(&[(0, &[])]; "no children")]
    #[test_case(&[(1, &[2])]; "only other posts")]
    /// Test that threads without replies under the root render to nothing.
    fn test_empty_thread(edges: &[(u32, &[u32])]) {
        assert_eq!(render(0, &adjacency(edges)).expect("Render failed"), "");
    }

    #[test]
    /// Test the nesting of a small thread with a nested reply and a leaf.
    fn test_nested_thread() {
        let adjacency = adjacency(&[(0, &[1, 2]), (1, &[3]), (2, &[])]);
        let expected = [block("c1", &[block("c3", &[])]), block("c2", &[])].join("\n");
        assert_eq!(render(0, &adjacency).expect("Render failed"), expected);
    }

    #[test]
    /// Test that flat replies each get one block, in input order.
    fn test_flat_thread_order() {
        let adjacency = adjacency(&[(0, &[5, 3, 4])]);
        let expected = [block("c5", &[]), block("c3", &[]), block("c4", &[])].join("\n");
        assert_eq!(render(0, &adjacency).expect("Render failed"), expected);
    }

    #[test]
    /// Test that permuting siblings permutes their blocks without other changes.
    fn test_sibling_permutation() {
        let forward = render(0, &adjacency(&[(0, &[1, 2]), (1, &[3, 4])])).expect("Render failed");
        let swapped = render(0, &adjacency(&[(0, &[2, 1]), (1, &[4, 3])])).expect("Render failed");

        let c1 = block("c1", &[block("c3", &[]), block("c4", &[])]);
        let c1_swapped = block("c1", &[block("c4", &[]), block("c3", &[])]);
        assert_eq!(forward, [c1, block("c2", &[])].join("\n"));
        assert_eq!(swapped, [block("c2", &[]), c1_swapped].join("\n"));
    }

    #[test_case(1; "single")]
    #[test_case(5; "shallow")]
    #[test_case(64; "at default limit")]
    /// Test that a chain nests one block per level, innermost being the deepest reply.
    fn test_chain_depth(depth: u32) {
        let edges: Vec<(u32, Vec<u32>)> = (0..depth).map(|id| (id, vec![id + 1])).collect();
        let edges: Vec<(u32, &[u32])> = edges.iter().map(|(p, c)| (*p, c.as_slice())).collect();
        let html = render(0, &adjacency(&edges)).expect("Render failed");

        let expected = (1..=depth)
            .rev()
            .fold(String::new(), |inner, id| {
                let label = format!("c{id}");
                if inner.is_empty() {
                    block(&label, &[])
                } else {
                    block(&label, &[inner])
                }
            });
        assert_eq!(html, expected);
        assert_eq!(html.matches(INDENT_OPEN).count(), depth as usize);
    }

    #[test]
    /// Test that rendering a subtree gives exactly what's nested under it in the full thread.
    fn test_subtree_isolation() {
        let adjacency = adjacency(&[(0, &[1, 2]), (1, &[3, 4]), (3, &[5])]);
        let full = render(0, &adjacency).expect("Render failed");
        let subtree = render(1, &adjacency).expect("Render failed");

        assert_eq!(subtree, [block("c3", &[block("c5", &[])]), block("c4", &[])].join("\n"));
        assert!(full.contains(&block("c1", &[subtree.clone()])));
    }

    #[test]
    /// Test that rendering twice gives the same output.
    fn test_deterministic() {
        let adjacency = adjacency(&[(0, &[1, 2]), (2, &[3])]);
        assert_eq!(
            render(0, &adjacency).expect("Render failed"),
            render(0, &adjacency).expect("Render failed")
        );
    }

    #[test_case(&[(0, &[1]), (1, &[1])]; "self reference")]
    #[test_case(&[(0, &[1]), (1, &[2]), (2, &[1])]; "cycle")]
    #[test_case(&[(0, &[1]), (1, &[0])]; "back to root")]
    #[test_case(&[(0, &[1, 2]), (1, &[3]), (2, &[3])]; "shared child")]
    /// Test that adjacencies that aren't a forest are rejected.
    fn test_malformed_thread(edges: &[(u32, &[u32])]) {
        let result = render(0, &adjacency(edges));
        assert!(matches!(result, Err(AppError::MalformedThread(_))), "{result:?}");
    }

    #[test]
    /// Test that threads nesting beyond the limit are rejected.
    fn test_too_deep() {
        let adjacency = adjacency(&[(0, &[1]), (1, &[2]), (2, &[3])]);
        let result = ThreadRenderer::new(label, 2).render_thread(
            &0,
            &adjacency,
            &RenderContext::anonymous(String::new()),
        );
        assert!(matches!(result, Err(AppError::ThreadTooDeep(2))), "{result:?}");
    }

    #[test]
    /// Test that one failing comment aborts the whole thread.
    fn test_node_failure_propagates() {
        let adjacency = adjacency(&[(0, &[1, 2, 3])]);
        let calls = Cell::new(0);
        let renderer = |node: &Node, _ctx: &RenderContext| -> AppResult<String> {
            calls.set(calls.get() + 1);
            if node.id == 2 {
                Err(AppError::NotFound(String::from("no author")))
            } else {
                Ok(String::new())
            }
        };
        let result = ThreadRenderer::with_default_depth(renderer).render_thread(
            &0,
            &adjacency,
            &RenderContext::anonymous(String::new()),
        );
        assert!(matches!(result, Err(AppError::NotFound(_))), "{result:?}");
        assert_eq!(calls.get(), 2, "Rendering continued after a failure");
    }

    #[test]
    /// Test that the context reaches every comment unchanged.
    fn test_context_threaded() {
        let adjacency = adjacency(&[(0, &[1]), (1, &[2])]);
        let renderer = |_node: &Node, ctx: &RenderContext| -> AppResult<String> {
            Ok(ctx.csrf_token.clone())
        };
        let html = ThreadRenderer::with_default_depth(renderer)
            .render_thread(&0, &adjacency, &RenderContext::anonymous(String::from("tok")))
            .expect("Render failed");
        assert_eq!(html.matches("tok").count(), 2);
    }
}
