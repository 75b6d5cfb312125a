use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::appointments::use_cases::book_appointment::inbound::graphql::BookAppointmentMutation;
use crate::modules::appointments::use_cases::slot_board::inbound::graphql::SlotBoardQuery;
use crate::modules::essays::use_cases::dashboard_insights::inbound::graphql::DashboardQuery;
use crate::modules::essays::use_cases::list_essays::inbound::graphql::EssaysQuery;
use crate::modules::essays::use_cases::register_essay::inbound::graphql::RegisterEssayMutation;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(EssaysQuery, DashboardQuery, SlotBoardQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(RegisterEssayMutation, BookAppointmentMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
