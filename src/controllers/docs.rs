use axum::{response::Html, Json};
use serde_json::{json, Value};

const DOCS_PAGE: &str = r##"<!DOCTYPE html>
<html>
<head>
  <title>TTS Gateway - API docs</title>
  <meta charset="utf-8">
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    SwaggerUIBundle({ url: "/openapi.json", dom_id: "#swagger-ui" });
  </script>
</body>
</html>
"##;

/// GET /docs - interactive API documentation
pub async fn docs() -> Html<&'static str> {
    Html(DOCS_PAGE)
}

/// GET /openapi.json
pub async fn openapi() -> Json<Value> {
    Json(openapi_document())
}

pub fn openapi_document() -> Value {
    let error = json!({ "$ref": "#/components/schemas/Error" });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "TTS Gateway",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "OpenAI-compatible text to speech backed by piper voices"
        },
        "paths": {
            "/health": {
                "get": {
                    "summary": "Health check",
                    "responses": {
                        "200": {
                            "description": "Service is up",
                            "content": { "application/json": { "schema": {
                                "type": "object",
                                "properties": { "api_status": { "type": "string", "example": "ok" } }
                            } } }
                        }
                    }
                }
            },
            "/audio/speech": {
                "post": {
                    "summary": "Create speech",
                    "description": "Creates speech from the input text. Compatible with OpenAI's TTS API.",
                    "security": [{ "bearer": [] }],
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": {
                            "$ref": "#/components/schemas/SpeechRequest"
                        } } }
                    },
                    "responses": {
                        "200": {
                            "description": "Synthesized audio",
                            "content": {
                                "audio/mpeg": { "schema": { "type": "string", "format": "binary" } },
                                "audio/wav": { "schema": { "type": "string", "format": "binary" } }
                            }
                        },
                        "400": { "description": "Invalid input", "content": { "application/json": { "schema": error } } },
                        "401": { "description": "Missing or non-bearer credentials", "content": { "application/json": { "schema": error } } },
                        "403": { "description": "Invalid API key", "content": { "application/json": { "schema": error } } },
                        "422": { "description": "Malformed body", "content": { "application/json": { "schema": error } } },
                        "500": { "description": "Speech generation failed", "content": { "application/json": { "schema": error } } }
                    }
                }
            }
        },
        "components": {
            "securitySchemes": {
                "bearer": { "type": "http", "scheme": "bearer" }
            },
            "schemas": {
                "SpeechRequest": {
                    "type": "object",
                    "required": ["model", "voice", "input"],
                    "properties": {
                        "model": { "type": "string", "description": "This has no effect" },
                        "voice": { "type": "string", "description": "Language code of the voice to use when detection is off or fails" },
                        "input": { "type": "string", "description": "The text to generate speech for" },
                        "response_format": { "type": "string", "enum": ["mp3", "wav"], "default": "mp3" },
                        "speed": { "type": "number", "default": 1.0, "exclusiveMinimum": 0 },
                        "auto_detect_language": { "type": "boolean", "default": true }
                    }
                },
                "Error": {
                    "type": "object",
                    "properties": { "detail": { "type": "string" } }
                }
            }
        }
    })
}
