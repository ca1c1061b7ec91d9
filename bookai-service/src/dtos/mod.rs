use serde::{Deserialize, Serialize};

/// Ebook generation parameters. Missing fields fall back to the documented
/// defaults at deserialization time.
#[derive(Debug, Clone, Deserialize)]
pub struct EbookRequest {
    #[serde(default = "default_pages")]
    pub pages: u32,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default = "default_genre")]
    pub genre: String,
    #[serde(default = "default_synopsis")]
    pub synopsis: String,
}

fn default_pages() -> u32 {
    5
}

fn default_title() -> String {
    "Título Desconhecido".to_string()
}

fn default_author() -> String {
    "Autor Desconhecido".to_string()
}

fn default_genre() -> String {
    "Geral".to_string()
}

fn default_synopsis() -> String {
    "Nenhuma sinopse fornecida.".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoverRequest {
    #[serde(default)]
    pub cover_prompt: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct EbookResponse {
    pub success: bool,
    pub ai_response_text: String,
    /// Cover description extracted from the generated text; empty when the
    /// model did not follow the structural contract.
    pub cover_prompt: String,
}

#[derive(Debug, Serialize)]
pub struct CoverResponse {
    pub success: bool,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ebook_request_defaults_apply_to_missing_fields() {
        let req: EbookRequest = serde_json::from_str("{}").unwrap();

        assert_eq!(req.pages, 5);
        assert_eq!(req.title, "Título Desconhecido");
        assert_eq!(req.author, "Autor Desconhecido");
        assert_eq!(req.genre, "Geral");
        assert_eq!(req.synopsis, "Nenhuma sinopse fornecida.");
    }

    #[test]
    fn ebook_request_keeps_supplied_fields() {
        let req: EbookRequest =
            serde_json::from_str(r#"{"pages": 3, "title": "T", "author": "A"}"#).unwrap();

        assert_eq!(req.pages, 3);
        assert_eq!(req.title, "T");
        assert_eq!(req.author, "A");
        assert_eq!(req.genre, "Geral");
    }

    #[test]
    fn cover_request_defaults_to_empty_prompt() {
        let req: CoverRequest = serde_json::from_str("{}").unwrap();
        assert!(req.cover_prompt.is_empty());
    }
}
