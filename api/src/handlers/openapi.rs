use actix_web::HttpResponse;
use serde_json::{json, Value};

use ge_shared::errors::ErrorCode;

use crate::{APP_DESCRIPTION, APP_TITLE};

/// OpenAPI 3.0.0 description of the public routes
pub fn openapi_document() -> Value {
    let codes: Vec<&str> = ErrorCode::ALL.iter().map(|code| code.as_str()).collect();
    let error_response = json!({ "$ref": "#/components/schemas/ErrorResponse" });

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": APP_TITLE,
            "description": APP_DESCRIPTION,
            "version": "1.0.0",
        },
        "paths": {
            "/auth/register": {
                "post": {
                    "summary": "Register a new account",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/RegisterRequest" }
                            }
                        }
                    },
                    "responses": {
                        "400": {
                            "description": "The request data is invalid.",
                            "content": { "application/json": { "schema": error_response } }
                        },
                        "500": {
                            "description": "An unexpected error occurred on the server.",
                            "content": { "application/json": { "schema": error_response } }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "RegisterRequest": {
                    "type": "object",
                    "required": ["name", "email", "password"],
                    "properties": {
                        "name": { "type": "string", "minLength": 1, "maxLength": 100 },
                        "email": { "type": "string", "format": "email" },
                        "password": { "type": "string", "minLength": 8, "maxLength": 100 }
                    }
                },
                "ErrorResponse": {
                    "type": "object",
                    "required": ["success", "error"],
                    "properties": {
                        "success": { "type": "boolean", "enum": [false] },
                        "error": {
                            "type": "object",
                            "required": ["code", "name", "message"],
                            "properties": {
                                "code": { "type": "string", "enum": codes },
                                "name": { "type": "string" },
                                "message": { "type": "string" },
                                "details": { "type": "object", "additionalProperties": true }
                            }
                        }
                    }
                }
            }
        }
    })
}

pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(openapi_document())
}
