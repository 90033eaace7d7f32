//! End-to-end checks against a server bound to an ephemeral port.

use backend::{build_app, AppState, Config};
use contracts::domain::a002_designation::aggregate as designation;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tokio::net::TcpListener;

const TEST_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 0

[auth]
jwt_secret = "integration-test-secret"
token_lifetime_hours = 1

[[auth.users]]
username = "admin"
password = "admin123"
"#;

struct TestServer {
    base: String,
    token: String,
    client: Client,
}

impl TestServer {
    async fn start() -> Self {
        let config: Config = toml::from_str(TEST_CONFIG).unwrap();
        let app = build_app(AppState::from_config(&config).unwrap(), None);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = Client::new();
        let login: Value = client
            .post(format!("{}/Account/Login", base))
            .json(&json!({"username": "admin", "password": "admin123"}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let token = login["token"].as_str().unwrap().to_string();
        Self { base, token, client }
    }

    async fn get(&self, path: &str) -> (StatusCode, Value) {
        let res = self
            .client
            .get(format!("{}{}", self.base, path))
            .bearer_auth(&self.token)
            .send()
            .await
            .unwrap();
        let status = res.status();
        (status, res.json().await.unwrap_or(Value::Null))
    }

    async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let res = self
            .client
            .post(format!("{}{}", self.base, path))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = res.status();
        (status, res.json().await.unwrap_or(Value::Null))
    }

    async fn put(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let res = self
            .client
            .put(format!("{}{}", self.base, path))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = res.status();
        (status, res.json().await.unwrap_or(Value::Null))
    }

    async fn delete(&self, path: &str) -> StatusCode {
        self.client
            .delete(format!("{}{}", self.base, path))
            .bearer_auth(&self.token)
            .send()
            .await
            .unwrap()
            .status()
    }
}

#[tokio::test]
async fn test_requests_without_token_are_rejected() {
    let server = TestServer::start().await;
    let res = server
        .client
        .get(format!("{}/Department/GetDepartments", server.base))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = server
        .client
        .get(format!("{}/Department/GetDepartments", server.base))
        .bearer_auth("not-a-token")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let health = server.client.get(format!("{}/health", server.base)).send().await.unwrap();
    assert_eq!(health.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_bad_login() {
    let server = TestServer::start().await;
    let res = server
        .client
        .post(format!("{}/Account/Login", server.base))
        .json(&json!({"username": "admin", "password": "wrong"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Invalid username or password");
}

#[tokio::test]
async fn test_crud_round_trip() {
    let server = TestServer::start().await;
    let (status, created) = server
        .post("/Department/InsertDepartment", json!({"departmentName": "Training"}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["departmentId"].as_i64().unwrap();
    assert!(id > 0);

    // the path id wins over the body id
    let (status, updated) = server
        .put(
            &format!("/Department/UpdateDepartment/{}", id),
            json!({"departmentId": 999, "departmentName": "Academics"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["departmentId"], id);

    let (_, list) = server.get("/Department/GetDepartments").await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["departmentName"], "Academics");

    assert_eq!(
        server.delete(&format!("/Department/DeleteDepartment/{}", id)).await,
        StatusCode::NO_CONTENT
    );
    let (status, _) = server.get(&format!("/Department/GetDepartment/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        server.delete(&format!("/Department/DeleteDepartment/{}", id)).await,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_derived_fields_are_recomputed_on_save() {
    let server = TestServer::start().await;
    let (_, admission) = server
        .post(
            "/Admission/InsertAdmission",
            json!({"totalFee": 10000.0, "discountAmount": 1500.0, "payableAmount": 1.0}),
        )
        .await;
    assert_eq!(admission["payableAmount"].as_f64(), Some(8500.0));

    let (_, receipt) = server
        .post(
            "/MoneyReceipt/InsertMoneyReceipt",
            json!({"category": "Other", "admissionId": 4, "payableAmount": 500.0, "paidAmount": 200.0}),
        )
        .await;
    assert_eq!(receipt["dueAmount"].as_f64(), Some(300.0));
    assert_eq!(receipt["admissionId"], 0);

    let (_, assessment) = server
        .post(
            "/Assessment/InsertAssessment",
            json!({"theoreticalScore": 70.0, "practicalScore": 90.0, "daysPresent": 8, "totalDays": 10}),
        )
        .await;
    assert_eq!(assessment["overallScore"].as_f64(), Some(80.0));
    assert_eq!(assessment["attendancePercentage"].as_f64(), Some(80.0));
}

#[tokio::test]
async fn test_references_are_embedded_on_read() {
    let server = TestServer::start().await;
    server
        .post("/Department/InsertDepartment", json!({"departmentName": "Training"}))
        .await;
    let (_, designation) = server
        .post(
            "/Designation/InsertDesignation",
            json!({"designationTitle": "Trainer", "departmentId": 1}),
        )
        .await;
    assert_eq!(designation["department"]["departmentName"], "Training");

    // the employee form's cascading source must hit a served route
    let by_department = designation::BY_DEPARTMENT;
    let (status, scoped) = server.get(&by_department.url(Some(1)).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(scoped.as_array().unwrap().len(), 1);
    let (_, other) = server.get(&by_department.url(Some(2)).unwrap()).await;
    assert!(other.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_batch_pipeline_contexts() {
    let server = TestServer::start().await;
    server
        .post("/Instructor/InsertInstructor", json!({"instructorName": "Mr. Rahman"}))
        .await;
    server
        .post(
            "/Batch/InsertBatch",
            json!({"batchName": "B-1", "instructorId": 1, "startDate": "2024-01-01"}),
        )
        .await;
    for name in ["Rahim", "Karim"] {
        server
            .post("/Trainee/InsertTrainee", json!({"traineeName": name, "batchId": 1}))
            .await;
    }
    server
        .post(
            "/Assessment/InsertAssessment",
            json!({"batchId": 1, "traineeId": 1, "instructorId": 1}),
        )
        .await;

    let (status, context) = server.get("/Assessment/GetBatchAssessmentContext/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(context["instructorId"], 1);
    assert_eq!(context["instructorName"], "Mr. Rahman");
    let trainees = context["trainees"].as_array().unwrap();
    assert_eq!(trainees.len(), 1);
    assert_eq!(trainees[0]["traineeName"], "Karim");

    let (_, context) = server.get("/Recommendation/GetBatchRecommendationContext/1").await;
    assert_eq!(context["trainees"][0]["traineeName"], "Rahim");

    server
        .post(
            "/Recommendation/InsertRecommendation",
            json!({"batchId": 1, "traineeId": 1, "status": "Recommended"}),
        )
        .await;
    let (_, context) = server.get("/Certificate/GetBatchCertificateContext/1").await;
    assert_eq!(context["trainees"].as_array().unwrap().len(), 1);

    let (status, _) = server.get("/Assessment/GetBatchAssessmentContext/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, options) = server.get("/Trainee/GetTraineeOptions").await;
    assert_eq!(options.as_array().unwrap().len(), 2);
    let (_, by_batch) = server.get("/Trainee/GetTraineesByBatch/1").await;
    assert_eq!(by_batch[0]["batch"]["batchName"], "B-1");
}

#[tokio::test]
async fn test_employee_envelope() {
    let server = TestServer::start().await;
    let (status, missing) = server.get("/Employee/GetEmployee/7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(missing["isSuccess"], false);
    assert_eq!(missing["httpStatusCode"], 404);

    server
        .post("/Department/InsertDepartment", json!({"departmentName": "Training"}))
        .await;
    server
        .post(
            "/Designation/InsertDesignation",
            json!({"designationTitle": "Trainer", "departmentId": 1}),
        )
        .await;

    let form = Form::new()
        .text("employeeName", "Karim")
        .text("email", "karim@x.com")
        .text("contactNo", "01711111111")
        .text("departmentId", "1")
        .text("designationId", "1")
        .text("joiningDate", "2024-01-15")
        .text("isActive", "true")
        .text("password", "secret1")
        .text("confirmPassword", "secret1")
        .part("imageFile", Part::bytes(vec![1, 2, 3]).file_name("photo.png"));
    let created: Value = server
        .client
        .post(format!("{}/Employee/InsertEmployee", server.base))
        .bearer_auth(&server.token)
        .multipart(form)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created["isSuccess"], true, "{}", created);
    let data = &created["data"];
    assert_eq!(data["employeeId"], 1);
    assert_eq!(data["designation"]["designationTitle"], "Trainer");
    assert!(data["imagePath"].as_str().unwrap().starts_with("/uploads/employee/"));
    assert!(data.get("password").is_none());
    assert!(data.get("passwordHash").is_none());

    // mismatched confirmation fails inside the envelope
    let form = Form::new()
        .text("employeeName", "Nadia")
        .text("email", "nadia@x.com")
        .text("contactNo", "01811111111")
        .text("departmentId", "1")
        .text("designationId", "1")
        .text("joiningDate", "2024-02-01")
        .text("password", "secret1")
        .text("confirmPassword", "secret2");
    let rejected: Value = server
        .client
        .post(format!("{}/Employee/InsertEmployee", server.base))
        .bearer_auth(&server.token)
        .multipart(form)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(rejected["isSuccess"], false);
    assert_eq!(rejected["httpStatusCode"], 400);

    let (_, list) = server.get("/Employee/GetEmployees").await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_visitor_lifecycle_and_payment_summary() {
    let server = TestServer::start().await;
    let (status, visitor) = server
        .post(
            "/Visitor/InsertVisitor",
            json!({
                "visitorName": "Jane Doe",
                "contactNo": "01711111111",
                "email": "jane@x.com",
                "visitorType": "Individual",
                "organizationName": "ignored"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(visitor["organizationName"], Value::Null);
    let id = visitor["visitorId"].as_i64().unwrap();

    let (status, _) = server
        .put(
            &format!("/Visitor/UpdateVisitor/{}", id),
            json!({
                "visitorName": "Jane Doe",
                "contactNo": "01711111111",
                "email": "jane@x.com",
                "visitorType": "Organization",
                "organizationName": "Acme Ltd"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, detail) = server.get(&format!("/Visitor/GetVisitor/{}", id)).await;
    assert_eq!(detail["visitorType"], "Organization");
    assert_eq!(detail["organizationName"], "Acme Ltd");

    for (payable, paid) in [(500.0, 200.0), (300.0, 300.0)] {
        server
            .post(
                "/MoneyReceipt/InsertMoneyReceipt",
                json!({"visitorId": id, "category": "Other", "payableAmount": payable, "paidAmount": paid}),
            )
            .await;
    }
    let (status, summary) = server
        .get(&format!("/Visitor/GetVisitorPaymentSummary/{}", id))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["visitorName"], "Jane Doe");
    assert_eq!(summary["totalPayable"].as_f64(), Some(800.0));
    assert_eq!(summary["totalPaid"].as_f64(), Some(500.0));
    assert_eq!(summary["totalDue"].as_f64(), Some(300.0));
    assert_eq!(summary["receiptCount"], 2);

    let (status, _) = server.get("/Visitor/GetVisitorPaymentSummary/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
