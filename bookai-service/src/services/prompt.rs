//! Prompt templating and best-effort extraction of the cover description.
//!
//! The generated text is instructed to open with a cover-image description
//! tagged with [`COVER_PROMPT_MARKER`], followed by [`SECTION_SEPARATOR`] on
//! its own line, followed by the page-numbered ebook body.

use crate::dtos::EbookRequest;

/// Marker the model must prefix its cover-description line with.
pub const COVER_PROMPT_MARKER: &str = "[CAPA_PROMPT]:";

/// Delimiter between the cover description and the ebook body.
pub const SECTION_SEPARATOR: &str = "---";

/// Build the full generation instruction for an ebook request.
pub fn build_ebook_prompt(req: &EbookRequest) -> String {
    format!(
        "Aja como um gerador de conteúdo para Ebooks e um assistente de design.\n\
         Gere o conteúdo COMPLETO de um ebook de {pages} páginas.\n\
         \n\
         **FORMATO ESTRUTURAL OBRIGATÓRIO:**\n\
         1. A primeira linha deve ser o prompt de imagem para a capa. Use o formato: {marker} (descrição).\n\
         2. Use o separador \"{separator}\" para dividir a capa do conteúdo.\n\
         3. O conteúdo deve ser em **Markdown** ou HTML e usar marcações **PÁGINA X:**.\n\
         4. O título é **{title}** e o autor **{author}**.\n\
         5. O estilo da escrita deve ser {genre}.\n\
         \n\
         **SINOPSE:** {synopsis}\n\
         \n\
         **EXEMPLO DE INÍCIO DA RESPOSTA:**\n\
         \n\
         {marker} Um robô detetive no estilo noir, iluminado pela chuva...\n\
         {separator}\n\
         [CONTEUDO_INICIO]:\n",
        pages = req.pages,
        marker = COVER_PROMPT_MARKER,
        separator = SECTION_SEPARATOR,
        title = req.title,
        author = req.author,
        genre = req.genre,
        synopsis = req.synopsis,
    )
}

/// Extract the cover description from a generated reply.
///
/// Pure and total: returns `None` when the marker is missing instead of
/// treating a non-conforming reply as an error.
pub fn extract_cover_prompt(text: &str) -> Option<String> {
    if !text.contains(COVER_PROMPT_MARKER) {
        return None;
    }

    let head = text.split(SECTION_SEPARATOR).next().unwrap_or(text);
    Some(head.replace(COVER_PROMPT_MARKER, "").trim().to_string())
}
