//! Sample repositories shown while no search results are held

use crate::models::{Owner, Repository};

fn sample(
    id: &str,
    name: &str,
    description: &str,
    login: &str,
    stats: (u64, u64, u64),
    language: &str,
    dates: (&str, &str),
) -> Repository {
    let url = format!("https://github.com/{}", name);
    let (stars, forks, watchers) = stats;
    let (created_at, updated_at) = dates;
    Repository {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        readme_url: Repository::readme_url_for(&url),
        url,
        owner: Owner {
            login: login.to_string(),
            avatar_url: format!("https://api.dicebear.com/7.x/avataaars/svg?seed={}", login),
        },
        stars,
        forks,
        watchers,
        language: language.to_string(),
        created_at: created_at.to_string(),
        updated_at: updated_at.to_string(),
    }
}

/// Built-in empty-state dataset
///
/// Callers inject this (or their own list) into the explorer; nothing reads it
/// implicitly.
pub fn sample_repositories() -> Vec<Repository> {
    vec![
        sample(
            "1",
            "openai/gpt-4",
            "GPT-4 is a large multimodal model that can solve difficult problems with greater accuracy than previous models.",
            "openai",
            (45_000, 8_500, 0),
            "Python",
            ("2023-01-15", "2023-06-20"),
        ),
        sample(
            "2",
            "huggingface/transformers",
            "State-of-the-art Natural Language Processing for PyTorch and TensorFlow.",
            "huggingface",
            (38_000, 7_200, 0),
            "Python",
            ("2022-11-05", "2023-06-18"),
        ),
        sample(
            "3",
            "tensorflow/tensorflow",
            "An open source machine learning framework for everyone.",
            "tensorflow",
            (175_000, 87_000, 0),
            "C++",
            ("2015-11-07", "2023-06-21"),
        ),
        sample(
            "4",
            "pytorch/pytorch",
            "Tensors and Dynamic neural networks in Python with strong GPU acceleration.",
            "pytorch",
            (68_000, 19_000, 0),
            "Python",
            ("2016-08-13", "2023-06-19"),
        ),
        sample(
            "5",
            "microsoft/DeepSpeed",
            "DeepSpeed is a deep learning optimization library that makes distributed training easy, efficient, and effective.",
            "microsoft",
            (28_000, 3_500, 1_200),
            "Python",
            ("2020-02-10", "2023-06-17"),
        ),
    ]
}
