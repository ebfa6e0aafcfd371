//! Fixed prompt sent to the text-generation model

use crate::parameters::HealthParameters;

/// Heading the model is asked to put above the risk summary
pub const PREDICTION_HEADING: &str = "📋 Prediction Summary of Risk";

/// Heading the model is asked to put above the advice section
pub const RECOMMENDATIONS_HEADING: &str = "✅ Recommendations & Precautions";

/// Render the risk-assessment prompt for one set of parameters.
///
/// The reply layout requested here is what `segment` expects to find.
pub fn build_prompt(p: &HealthParameters) -> String {
    format!(
        r#"
You are a medical AI assistant. Based on the following health parameters, assess the patient's risk of common diseases and give personalized recommendations and specific precautions to be taken:

Age: {age}
Blood Pressure: {sys}/{dia} mmHg
Glucose Level: {glucose} mg/dL
Cholesterol Level: {cholesterol} mg/dL

Thyroid Function:
- TSH: {tsh} µIU/mL
- T3: {t3} ng/dL
- T4: {t4} µg/dL

Liver Function:
- ALT: {alt} U/L
- AST: {ast} U/L
- Bilirubin: {bilirubin} mg/dL

Please analyze this data for potential health conditions:
- Diabetes
- Hypertension
- Heart Disease
- Thyroid Disorders
- Liver Disease

Respond with the following structure:

{prediction_heading}
-----------------------------
Provide a concise summary of the patient's disease risk levels (e.g., High, Moderate, Low) with a brief explanation for each relevant condition.

{recommendations_heading}
-----------------
Give practical and personalized advice such as:
- Lifestyle changes (diet, exercise)
- Follow-up tests or specialist visits
- Medication reminders (if applicable)
- Monitoring frequency for key parameters like blood pressure, glucose, etc.
- **Specific precautions** the patient should take based on their input values (e.g., avoid salt if hypertensive, avoid alcohol if liver enzymes are high, etc.)

Make sure to mention blood pressure in detail: {sys}/{dia} mmHg and what this means for the patient's health.

Do not use any markdown formatting or special characters like *, **, etc.
Use plain text with clear headings as shown above.
"#,
        age = p.age,
        sys = p.systolic_bp,
        dia = p.diastolic_bp,
        glucose = p.glucose,
        cholesterol = p.cholesterol,
        tsh = p.tsh,
        t3 = p.t3,
        t4 = p.t4,
        alt = p.alt,
        ast = p.ast,
        bilirubin = p.bilirubin,
        prediction_heading = PREDICTION_HEADING,
        recommendations_heading = RECOMMENDATIONS_HEADING,
    )
}
