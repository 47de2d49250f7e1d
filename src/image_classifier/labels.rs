use std::path::Path;

pub fn parse_labels(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn load_labels(path: &Path) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read labels {}: {}", path.display(), e))?;
    Ok(parse_labels(&contents))
}

pub fn label_for(labels: &[String], index: usize) -> String {
    labels
        .get(index)
        .cloned()
        .unwrap_or_else(|| format!("class {}", index))
}
