use axum::response::Html;

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../../static/index.html"))
}

pub async fn reports_page() -> Html<&'static str> {
    Html(include_str!("../../../static/reports.html"))
}
