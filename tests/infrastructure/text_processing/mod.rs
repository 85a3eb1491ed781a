mod llm_transcription_adapter_test;
mod plain_text_adapter_test;
