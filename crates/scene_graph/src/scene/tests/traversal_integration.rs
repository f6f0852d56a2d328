//! Traversal views over pipeline-shaped hierarchies

use std::sync::Arc;

use crate::data_types::{AnimationData, BoneData, MeshData, TransformData};
use crate::foundation::math::Mat4;
use crate::scene::{NodeFilter, SceneGraph, TraversalOrder};

#[cfg(test)]
mod tests {
    use super::*;

    /// root -> bone1 -> bone2 -> animation (end point)
    ///               -> mesh  -> transform
    fn build_skeleton() -> SceneGraph {
        let mut graph = SceneGraph::new();
        let bone1 = graph
            .add_child(graph.root(), "bone1", Some(Arc::new(BoneData::default())))
            .unwrap();
        let bone2 = graph
            .add_child(bone1, "bone2", Some(Arc::new(BoneData::default())))
            .unwrap();
        let animation = graph
            .add_child(bone2, "animation", Some(Arc::new(AnimationData::new(vec![Mat4::identity()], 1.0))))
            .unwrap();
        graph.make_end_point(animation);

        let mesh = graph
            .add_child(bone1, "mesh", Some(Arc::new(MeshData::default())))
            .unwrap();
        graph
            .add_child(mesh, "transform", Some(Arc::new(TransformData::default())))
            .unwrap();
        graph
    }

    #[test]
    fn test_bone_traversal_with_pruning() {
        let graph = build_skeleton();
        let bone1 = graph.find("bone1").unwrap();

        let mut visited = Vec::new();
        let mut animations = Vec::new();
        let mut iter = graph.downwards(bone1, TraversalOrder::BreadthFirst, true);
        while let Some(node) = iter.next() {
            if !node.content_is::<BoneData>() {
                iter.ignore_node_descendants();
                continue;
            }
            visited.push(node.name().path().to_string());

            let tracks: Vec<_> = graph
                .children(node.index(), NodeFilter::EndPointsOnly)
                .filter(|child| child.content_is::<AnimationData>())
                .map(|child| child.index())
                .collect();
            animations.push(tracks);
        }

        assert_eq!(visited, ["bone1", "bone1/bone2"]);
        assert!(animations[0].is_empty());
        assert_eq!(animations[1], vec![graph.find("bone1/bone2/animation").unwrap()]);
    }

    #[test]
    fn test_views_read_names_and_content() {
        let graph = build_skeleton();
        let pairs: Vec<(String, Option<&'static str>)> = graph
            .downwards(graph.root(), TraversalOrder::DepthFirst, false)
            .map(|node| {
                (
                    node.name().path().to_string(),
                    node.content().map(|content| content.type_label()),
                )
            })
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("bone1".to_string(), Some("BoneData")),
                ("bone1/bone2".to_string(), Some("BoneData")),
                ("bone1/bone2/animation".to_string(), Some("AnimationData")),
                ("bone1/mesh".to_string(), Some("MeshData")),
                ("bone1/mesh/transform".to_string(), Some("TransformData")),
            ]
        );
    }

    #[test]
    fn test_filtered_descent() {
        let graph = build_skeleton();
        let end_points: Vec<_> = graph
            .downwards(graph.root(), TraversalOrder::BreadthFirst, true)
            .filter(|node| NodeFilter::EndPointsOnly.accepts(node.header()))
            .map(|node| node.name().name().to_string())
            .collect();
        assert_eq!(end_points, ["animation"]);
    }

    #[test]
    fn test_find_where() {
        let graph = build_skeleton();

        let mesh = graph.find_where(|_, content| content.is_some_and(|c| c.is::<MeshData>()));
        assert_eq!(mesh, graph.find("bone1/mesh"));

        let bone2 = graph.find("bone1/bone2").unwrap();
        let under = graph.find_where_under(bone2, |name, _| name.name() == "mesh");
        assert_eq!(under, None);

        let first_bone = graph.find_where(|_, content| content.is_some_and(|c| c.is::<BoneData>()));
        assert_eq!(first_bone, graph.find("bone1"));
    }

    #[test]
    fn test_shared_content_outlives_graph_reference() {
        let mut graph = SceneGraph::new();
        let bone: Arc<BoneData> = Arc::new(BoneData::default());
        graph
            .add_child(graph.root(), "bone", Some(bone.clone()))
            .unwrap();
        assert_eq!(Arc::strong_count(&bone), 2);

        graph.clear();
        assert_eq!(Arc::strong_count(&bone), 1);
    }
}
