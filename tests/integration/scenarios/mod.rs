mod http_fetcher;
mod pipeline_over_http;
