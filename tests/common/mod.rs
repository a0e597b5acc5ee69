//! Test utilities and fixtures for the lexscrape test suite

use ego_tree::NodeRef;
use kodegen_tools_lexscrape::markdown_converter::body_nodes;
use mockito::{Mock, Server};
use scraper::{Html, Node};

/// Title of [`FULL_DOCUMENT`]
#[allow(dead_code)]
pub const FULL_TITLE: &str =
    "Ley Orgánica 1/1996, de 15 de enero, de Protección Jurídica del Menor";

/// A complete document in the portal's markup, exercising every state.
#[allow(dead_code)]
pub const FULL_DOCUMENT: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>LO 1/1996</title>
</head>
<body>
<h2>Ley Orgánica 1/1996, de 15 de enero,  de Protección Jurídica del Menor</h2>
<p>Jefatura del Estado</p>
<h4>Exposición de motivos</h4>
<h4>SECCIÓN PRIMERA</h4>
<h4>Disposiciones generales</h4>
<h4>CAPÍTULO I</h4>
<h4>Ámbito y principios</h4>
<p>Artículo 1. Ámbito de <b>aplicación</b>.</p>
<p>La presente Ley será de aplicación a los menores de dieciocho años.</p>
<table>
  <tr><td>1. Objeto de la ley</td></tr>
  <tr><td>b)   Los menores extranjeros.</td></tr>
</table>
<p>&nbsp;</p>
<h4>CAPÍTULO II</h4>
<p>Artículo 2.- Principios generales.</p>
<h4>DISPOSICIONES TRANSITORIAS</h4>
<h4>I</h4>
<p>Artículo 3. Régimen transitorio.</p>
<table><tr><td>a) Pingüinos y cigüeñas</td></tr></table>
<hr>
<p>Notas</p>
<table>
  <tr><td>* Nota al pie</td></tr>
  <tr><td>** Redacción según Ley 26/2015</td></tr>
</table>
<p>Pie de página</p>
</body>
</html>"#;

/// Markdown expected for [`FULL_DOCUMENT`] with the default configuration.
#[allow(dead_code)]
pub fn full_document_markdown() -> String {
    [
        format!("{FULL_TITLE}\n{}\n", "=".repeat(FULL_TITLE.len())),
        "\nJefatura del Estado\n".to_string(),
        "\nExposición de motivos\n".to_string(),
        "\n## SECCIÓN PRIMERA\n".to_string(),
        "\nDisposiciones generales\n".to_string(),
        "\n### CAPÍTULO I\n".to_string(),
        "\n__Artículo 1__. Ámbito de aplicación.\n".to_string(),
        "\nLa presente Ley será de aplicación a los menores de dieciocho años.\n".to_string(),
        "\n1) Objeto de la ley\n\nb) Los menores extranjeros.\n".to_string(),
        "\n### CAPÍTULO II\n".to_string(),
        "\n__Artículo 2__. Principios generales.\n".to_string(),
        "\n## DISPOSICIONES TRANSITORIAS\n".to_string(),
        "\n### I\n".to_string(),
        "\n__Artículo 3__. Régimen transitorio.\n".to_string(),
        "\na) Pingüinos y cigüeñas\n".to_string(),
        "\n---\n\n(*) Nota al pie\n\n(**) Redacción según Ley 26/2015\n".to_string(),
    ]
    .concat()
}

/// Wrap body markup in a minimal document.
#[allow(dead_code)]
pub fn document(body: &str) -> String {
    format!("<!DOCTYPE html><html><head><title>t</title></head><body>{body}</body></html>")
}

/// Parse `html` and hand its body nodes to `f`.
#[allow(dead_code)]
pub fn with_body_nodes<T>(html: &str, f: impl FnOnce(&[NodeRef<'_, Node>]) -> T) -> T {
    let parsed = Html::parse_document(html);
    let nodes = body_nodes(&parsed).expect("document has a body");
    f(&nodes)
}

/// Mock endpoint serving raw HTML bytes with the given `Content-Type`.
#[allow(dead_code)]
pub fn create_html_mock(server: &mut Server, path: &str, content_type: &str, body: &[u8]) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", content_type)
        .with_body(body)
        .create()
}
