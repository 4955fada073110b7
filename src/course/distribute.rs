//! Video distribution across module shells
//!
//! The primary allocation rule depends on the module count and is lossy by
//! construction (slices and caps drop overflow). A leftover sweep afterwards
//! appends every still-unassigned video to the currently smallest module,
//! which restores the invariant that every selected video ends up in exactly
//! one module.

use super::levels::{classify_level, Level};
use super::structure::generate_module_structure;
use super::title::format_course_title;
use super::{AssembledCourse, CourseModule, CourseVideo, ModuleShell};
use crate::curation::ScoredVideo;
use tracing::debug;

/// Assemble a full course: format the title, generate module shells for the
/// topic and selection size, and distribute the selected videos.
pub fn assemble_course(topic: &str, selected: Vec<ScoredVideo>) -> AssembledCourse {
    let title = format_course_title(topic);
    let shells = generate_module_structure(topic, selected.len());
    let modules = distribute_videos(&shells, selected);

    AssembledCourse {
        description: format!("Learn {} through curated videos", title),
        title,
        topic: topic.to_string(),
        modules,
    }
}

/// Distribute leveled videos into module shells.
///
/// Every input video is assigned to exactly one module. Videos receive a
/// 1-based order index, sequential across the whole course in final module
/// order.
pub fn distribute_videos(shells: &[ModuleShell], videos: Vec<ScoredVideo>) -> Vec<CourseModule> {
    let levels: Vec<Level> = videos
        .iter()
        .map(|v| classify_level(&v.candidate.title, &v.candidate.description))
        .collect();

    // Bucket indices by level, preserving score order within each bucket
    let bucket = |level: Level| -> Vec<usize> {
        levels
            .iter()
            .enumerate()
            .filter(|(_, l)| **l == level)
            .map(|(i, _)| i)
            .collect()
    };
    let beginner = bucket(Level::Beginner);
    let intermediate = bucket(Level::Intermediate);
    let advanced = bucket(Level::Advanced);
    let practical = bucket(Level::Practical);

    let mut assigned = vec![false; videos.len()];
    let mut module_indices: Vec<Vec<usize>> = vec![Vec::new(); shells.len()];

    {
        let mut take = |module: usize, from: &[usize], cap: Option<usize>| {
            for &idx in from {
                if let Some(cap) = cap {
                    if module_indices[module].len() >= cap {
                        break;
                    }
                }
                if !assigned[idx] {
                    assigned[idx] = true;
                    module_indices[module].push(idx);
                }
            }
        };

        match shells.len() {
            2 => {
                // Basics + application
                take(0, &beginner, None);
                take(0, &intermediate[..intermediate.len().min(2)], None);
                take(1, &practical, None);
                take(1, &advanced, None);
            }
            4 => {
                // One level per module, up to 4 each; overflow is swept up below
                take(0, &beginner, Some(4));
                take(1, &intermediate, Some(4));
                take(2, &advanced, Some(4));
                take(3, &practical, Some(4));
            }
            _ => {
                // Default 3-module split
                let per_module = videos.len().div_ceil(3);
                let half = per_module / 2;

                take(0, &beginner, Some(per_module));
                take(0, &intermediate, Some(per_module));

                take(1, &intermediate, Some(per_module));
                take(1, &advanced[..advanced.len().min(half)], Some(per_module));

                take(2, &advanced, Some(per_module));
                take(2, &practical, Some(per_module));
            }
        }
    }

    // Leftover sweep: append each unassigned video to the currently
    // smallest module, recomputed after every append
    for idx in 0..videos.len() {
        if assigned[idx] {
            continue;
        }
        let smallest = module_indices
            .iter()
            .enumerate()
            .min_by_key(|(_, m)| m.len())
            .map(|(i, _)| i)
            .unwrap_or(0);
        debug!(
            "Sweeping unassigned video {} into module {}",
            videos[idx].candidate.title, smallest
        );
        module_indices[smallest].push(idx);
        assigned[idx] = true;
    }

    // Materialize modules, numbering videos sequentially across the course
    let mut order_counter = 0usize;
    shells
        .iter()
        .zip(module_indices)
        .map(|(shell, indices)| CourseModule {
            title: shell.title.clone(),
            description: shell.description.clone(),
            order_index: shell.order_index,
            videos: indices
                .into_iter()
                .map(|idx| {
                    order_counter += 1;
                    CourseVideo {
                        video: videos[idx].clone(),
                        level: levels[idx],
                        order_index: order_counter,
                    }
                })
                .collect(),
        })
        .collect()
}
