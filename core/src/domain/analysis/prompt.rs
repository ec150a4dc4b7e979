/// The instruction sent with every image. The model's reply is rendered
/// verbatim, so the expected output shape lives entirely in this text.
pub const NUTRITION_PROMPT: &str = r#"
You are a nutrition expert.

Analyze this image and:
- Detect and list **all fruits, vegetables, and meat items** in the image.
- For **each item**, provide:
  - Name
  - Taste description
  - Calories per 100g
  - Vitamins present
  - Key nutritional benefits

Then:
- Count the **total number of unique items**
- Calculate the **combined calories per 100g** (estimate based on items)
- List **all vitamins combined**
- Present the information in a clear, readable format
"#;

/// Generation temperature for every analysis call. The only tunable the
/// collaborator is given.
pub const ANALYSIS_TEMPERATURE: f32 = 0.4;
